use serde::{Deserialize, Serialize};

/// Default location of the result document, relative to the page
pub const DEFAULT_RESULTS_PATH: &str = "screener_results.json";

/// Full screening result set produced by the upstream screener run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScreenerResult {
    pub last_updated: String,
    #[serde(default)]
    pub cansl_passed: Vec<Stock>,
    #[serde(default)]
    pub turtle_signals: Vec<SignalRow>,
}

impl ScreenerResult {
    /// Rows carrying a buy signal, in document order
    pub fn buy_signals(&self) -> impl Iterator<Item = &SignalRow> {
        self.turtle_signals.iter().filter(|s| s.turtle_signal.is_buy())
    }

    /// Rows carrying an exit signal, in document order
    pub fn exit_signals(&self) -> impl Iterator<Item = &SignalRow> {
        self.turtle_signals.iter().filter(|s| s.turtle_signal.is_exit())
    }
}

/// A stock that passed the CANSL criteria
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stock {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "ClosePrice")]
    pub close_price: f64,
    #[serde(rename = "CANSLIM_Score", default, skip_serializing_if = "Option::is_none")]
    pub canslim_score: Option<f64>,
}

/// One Turtle signal raised for a qualifying stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalRow {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "ClosePrice")]
    pub close_price: f64,
    #[serde(rename = "Turtle_Signal")]
    pub turtle_signal: TurtleSignal,
    #[serde(rename = "CANSLIM_Score")]
    pub canslim_score: f64,
}

/// Turtle trading signal. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TurtleSignal {
    S1Buy,
    S2Buy,
    S1Exit,
    S2Exit,
    Other(String),
}

/// Which derived table a signal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Buy,
    Exit,
    Unclassified,
}

impl TurtleSignal {
    /// Raw value as it appears in the document
    pub fn as_str(&self) -> &str {
        match self {
            TurtleSignal::S1Buy => "S1_Buy",
            TurtleSignal::S2Buy => "S2_Buy",
            TurtleSignal::S1Exit => "S1_Exit",
            TurtleSignal::S2Exit => "S2_Exit",
            TurtleSignal::Other(raw) => raw,
        }
    }

    pub fn kind(&self) -> SignalKind {
        match self {
            TurtleSignal::S1Buy | TurtleSignal::S2Buy => SignalKind::Buy,
            TurtleSignal::S1Exit | TurtleSignal::S2Exit => SignalKind::Exit,
            TurtleSignal::Other(_) => SignalKind::Unclassified,
        }
    }

    pub fn is_buy(&self) -> bool {
        self.kind() == SignalKind::Buy
    }

    pub fn is_exit(&self) -> bool {
        self.kind() == SignalKind::Exit
    }

    /// CSS class for the signal badge, e.g. `signal-s1-buy`.
    /// Only the first underscore is replaced.
    pub fn badge_class(&self) -> String {
        format!("signal-{}", self.as_str().to_lowercase().replacen('_', "-", 1))
    }
}

impl From<String> for TurtleSignal {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "S1_Buy" => TurtleSignal::S1Buy,
            "S2_Buy" => TurtleSignal::S2Buy,
            "S1_Exit" => TurtleSignal::S1Exit,
            "S2_Exit" => TurtleSignal::S2Exit,
            _ => TurtleSignal::Other(raw),
        }
    }
}

impl From<TurtleSignal> for String {
    fn from(signal: TurtleSignal) -> Self {
        signal.as_str().to_string()
    }
}

impl std::fmt::Display for TurtleSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub source: String,
    pub base_url: Option<String>,
    pub currency_symbol: String,
    pub page_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: DEFAULT_RESULTS_PATH.to_string(),
            base_url: None,
            currency_symbol: "₩".to_string(),
            page_title: "CANSLIM + Turtle Screener".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from `lookup`, falling back to the defaults for
    /// any variable it does not provide
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Config::default();
        let base_url = match lookup("SCREENER_BASE_URL") {
            Some(raw) if !raw.trim().is_empty() => {
                url::Url::parse(raw.trim())
                    .map_err(|e| anyhow::anyhow!("SCREENER_BASE_URL is not a valid URL: {}", e))?;
                Some(raw.trim().to_string())
            }
            _ => None,
        };

        Ok(Config {
            source: lookup("SCREENER_SOURCE").unwrap_or(defaults.source),
            base_url,
            currency_symbol: lookup("SCREENER_CURRENCY").unwrap_or(defaults.currency_symbol),
            page_title: lookup("SCREENER_PAGE_TITLE").unwrap_or(defaults.page_title),
        })
    }
}
