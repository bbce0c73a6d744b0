//! Rendering through the controller against an in-memory view

use pretty_assertions::assert_eq;
use test_log::test;

use screener_ui::ui::render::{NO_BUY_MESSAGE, NO_CANSL_MESSAGE, NO_EXIT_MESSAGE};
use screener_ui::ui::{ElementId, MemoryView, Renderer, ScreenerApp, SignalCounts};

use crate::common::{fixtures, logging, sources::StaticSource};

async fn render(body: String) -> ScreenerApp<MemoryView, StaticSource> {
    let mut app = ScreenerApp::new(MemoryView::default(), StaticSource::Body(body), Renderer::new("₩"));
    app.init().await;
    app
}

#[test(tokio::test)]
async fn test_counts_match_document() {
    let app = render(fixtures::sample_json()).await;
    let view = app.view();

    let document = fixtures::sample_document();
    let counts = SignalCounts::from_result(&document);
    logging::log_test_data("counts", &counts);

    assert_eq!(view.text(ElementId::CanslCount), Some(document.cansl_passed.len().to_string().as_str()));
    assert_eq!(view.text(ElementId::BuyCount), Some("2"));
    assert_eq!(view.text(ElementId::ExitCount), Some("2"));
    assert_eq!(counts, SignalCounts { cansl: 3, buy: 2, exit: 2 });
}

#[test(tokio::test)]
async fn test_rows_follow_filters() {
    let app = render(fixtures::sample_json()).await;
    let view = app.view();

    let cansl = view.html(ElementId::CanslTableBody).unwrap();
    assert_eq!(cansl.matches("<tr>").count(), 3);
    assert!(cansl.contains("<td>₩178,000</td>"));

    let buys = view.html(ElementId::BuyTableBody).unwrap();
    assert_eq!(buys.matches("<tr>").count(), 2);
    assert!(buys.contains(">S1_Buy</span>"));
    assert!(buys.contains(">S2_Buy</span>"));

    let exits = view.html(ElementId::ExitTableBody).unwrap();
    assert_eq!(exits.matches("<tr>").count(), 2);
    assert!(exits.contains("signal-badge signal-s1-exit"));
    assert!(!exits.contains("S3_Watch"));
    assert!(!buys.contains("S3_Watch"));
}

#[test(tokio::test)]
async fn test_empty_document_shows_empty_states() {
    let app = render(fixtures::empty_json()).await;
    let view = app.view();

    assert_eq!(
        view.html(ElementId::CanslTableBody),
        Some(format!("<tr><td colspan=\"4\" class=\"no-data\">{}</td></tr>", NO_CANSL_MESSAGE).as_str())
    );
    assert_eq!(
        view.html(ElementId::BuyTableBody),
        Some(format!("<tr><td colspan=\"5\" class=\"no-data\">{}</td></tr>", NO_BUY_MESSAGE).as_str())
    );
    assert!(view.html(ElementId::ExitTableBody).unwrap().contains(NO_EXIT_MESSAGE));
    assert_eq!(view.text(ElementId::CanslCount), Some("0"));
    assert_eq!(view.text(ElementId::LastUpdated), Some("Last Updated: 2025-03-14 16:05:00 KST"));
}

#[test(tokio::test)]
async fn test_markup_in_ticker_is_literal_text() {
    let app = render(fixtures::hostile_json()).await;
    let view = app.view();

    for id in [ElementId::CanslTableBody, ElementId::BuyTableBody] {
        let rows = view.html(id).unwrap();
        assert!(!rows.contains("<script>"), "{:?} leaked markup", id);
        assert!(rows.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
        assert!(rows.contains("&lt;b&gt;Evil&lt;/b&gt; &amp; Sons"));
    }

    // Header text stays literal in the view and is escaped when serialised
    assert_eq!(view.text(ElementId::LastUpdated), Some("Last Updated: <i>today</i>"));
}

#[test]
fn test_render_from_blocking_context() {
    let app = tokio_test::block_on(render(fixtures::empty_json()));
    assert!(app.state().is_loaded());
    assert_eq!(app.view().text(ElementId::ExitCount), Some("0"));
}
