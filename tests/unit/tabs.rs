//! Tab switching through the controller

use pretty_assertions::assert_eq;
use test_log::test;

use screener_ui::ui::events::{EventManager, UiEvent};
use screener_ui::ui::{MemoryView, Renderer, ScreenerApp, Tab, TabError};

use crate::common::{fixtures, sources::StaticSource};

fn app() -> ScreenerApp<MemoryView, StaticSource> {
    let mut app = ScreenerApp::new(
        MemoryView::default(),
        StaticSource::Body(fixtures::sample_json()),
        Renderer::default(),
    );
    app.setup_tabs();
    app
}

fn assert_only_active(app: &ScreenerApp<MemoryView, StaticSource>, tab: Tab) {
    assert_eq!(app.view().active_triggers(), vec![tab.name()]);
    assert_eq!(app.view().active_panels(), vec![tab.panel_id().as_str()]);
    assert_eq!(app.active_tab(), Some(tab));
}

#[test]
fn test_every_tab_switch_is_exclusive() {
    let mut app = app();
    for tab in Tab::ALL {
        app.switch_tab(tab.name()).unwrap();
        assert_only_active(&app, tab);
    }
}

#[test]
fn test_switching_to_active_tab_is_idempotent() {
    let mut app = app();
    app.switch_tab("buy").unwrap();
    app.switch_tab("buy").unwrap();
    assert_only_active(&app, Tab::Buy);
}

#[test]
fn test_unknown_tab_is_rejected() {
    let mut app = app();
    app.switch_tab("exit").unwrap();

    assert_eq!(app.switch_tab("sell"), Err(TabError::Unknown("sell".to_string())));
    assert_only_active(&app, Tab::Exit);
}

#[test(tokio::test)]
async fn test_clicks_from_another_task() {
    let mut app = app();
    let mut events = EventManager::new();
    let sender = events.sender();

    let producer = tokio::spawn(async move {
        sender.send(UiEvent::TabClicked("exit".to_string())).await.unwrap();
        sender.send(UiEvent::TabClicked("buy".to_string())).await.unwrap();
        sender.send(UiEvent::Shutdown).await.unwrap();
    });

    app.run_event_loop(&mut events).await;
    producer.await.unwrap();

    assert_only_active(&app, Tab::Buy);
}
