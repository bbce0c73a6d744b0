//! Turns a loaded result set into table markup and summary counts.
//!
//! Everything here is a pure function of the document; the only side effect
//! is writing into the supplied [`ViewBinding`].

use tracing::info;

use super::escape::escape_html;
use super::view::{ElementId, ViewBinding};
use crate::models::{ScreenerResult, SignalRow};
use crate::utils::{format_price, format_score};

pub const NO_CANSL_MESSAGE: &str = "No stocks passed CANSL criteria";
pub const NO_BUY_MESSAGE: &str = "No buy signals detected";
pub const NO_EXIT_MESSAGE: &str = "No exit signals detected";

const CANSL_COLUMNS: usize = 4;
const SIGNAL_COLUMNS: usize = 5;

/// Summary counts shown on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalCounts {
    pub cansl: usize,
    pub buy: usize,
    pub exit: usize,
}

impl SignalCounts {
    /// Counted straight from the document, not from rendered rows
    pub fn from_result(result: &ScreenerResult) -> Self {
        Self {
            cansl: result.cansl_passed.len(),
            buy: result.buy_signals().count(),
            exit: result.exit_signals().count(),
        }
    }
}

/// Renders the three result tables
#[derive(Debug, Clone)]
pub struct Renderer {
    currency_symbol: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("₩")
    }
}

impl Renderer {
    pub fn new(currency_symbol: &str) -> Self {
        Self {
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn last_updated_text(&self, result: &ScreenerResult) -> String {
        format!("Last Updated: {}", result.last_updated)
    }

    pub fn cansl_rows(&self, result: &ScreenerResult) -> String {
        if result.cansl_passed.is_empty() {
            return empty_row(CANSL_COLUMNS, NO_CANSL_MESSAGE);
        }

        result
            .cansl_passed
            .iter()
            .map(|stock| {
                let score = stock
                    .canslim_score
                    .map(format_score)
                    .unwrap_or_else(|| "-".to_string());
                format!(
                    "<tr>\n    <td><strong>{}</strong></td>\n    <td>{}</td>\n    <td>{}</td>\n    <td><span class=\"score-badge\">{}</span></td>\n</tr>\n",
                    escape_html(&stock.ticker),
                    escape_html(&stock.company_name),
                    self.price(stock.close_price),
                    escape_html(&score),
                )
            })
            .collect()
    }

    pub fn buy_rows(&self, result: &ScreenerResult) -> String {
        let rows: Vec<&SignalRow> = result.buy_signals().collect();
        self.signal_rows(&rows, NO_BUY_MESSAGE)
    }

    pub fn exit_rows(&self, result: &ScreenerResult) -> String {
        let rows: Vec<&SignalRow> = result.exit_signals().collect();
        self.signal_rows(&rows, NO_EXIT_MESSAGE)
    }

    fn signal_rows(&self, rows: &[&SignalRow], empty_message: &str) -> String {
        if rows.is_empty() {
            return empty_row(SIGNAL_COLUMNS, empty_message);
        }

        rows.iter()
            .map(|row| {
                format!(
                    "<tr>\n    <td><strong>{}</strong></td>\n    <td>{}</td>\n    <td>{}</td>\n    <td><span class=\"signal-badge {}\">{}</span></td>\n    <td><span class=\"score-badge\">{}</span></td>\n</tr>\n",
                    escape_html(&row.ticker),
                    escape_html(&row.company_name),
                    self.price(row.close_price),
                    escape_html(&row.turtle_signal.badge_class()),
                    escape_html(row.turtle_signal.as_str()),
                    escape_html(&format_score(row.canslim_score)),
                )
            })
            .collect()
    }

    fn price(&self, price: f64) -> String {
        escape_html(&format_price(price, &self.currency_symbol))
    }

    /// Write header, tables and counts into the view
    pub fn render_all<V: ViewBinding + ?Sized>(&self, result: &ScreenerResult, view: &mut V) {
        view.set_text(ElementId::LastUpdated, &self.last_updated_text(result));
        view.set_html(ElementId::CanslTableBody, &self.cansl_rows(result));
        view.set_html(ElementId::BuyTableBody, &self.buy_rows(result));
        view.set_html(ElementId::ExitTableBody, &self.exit_rows(result));

        let counts = SignalCounts::from_result(result);
        view.set_text(ElementId::CanslCount, &counts.cansl.to_string());
        view.set_text(ElementId::BuyCount, &counts.buy.to_string());
        view.set_text(ElementId::ExitCount, &counts.exit.to_string());

        info!(
            "Rendered {} CANSL stocks, {} buy signals, {} exit signals",
            counts.cansl, counts.buy, counts.exit
        );
    }
}

fn empty_row(columns: usize, message: &str) -> String {
    format!(
        "<tr><td colspan=\"{}\" class=\"no-data\">{}</td></tr>",
        columns,
        escape_html(message)
    )
}
