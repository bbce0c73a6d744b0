//! Result documents shaped like the screener's output

use screener_ui::models::{ScreenerResult, SignalRow, Stock, TurtleSignal};

pub fn create_test_stock(ticker: &str, company_name: &str, close_price: f64) -> Stock {
    Stock {
        ticker: ticker.to_string(),
        company_name: company_name.to_string(),
        close_price,
        canslim_score: Some(4.0),
    }
}

pub fn create_test_signal(ticker: &str, company_name: &str, signal: TurtleSignal) -> SignalRow {
    SignalRow {
        ticker: ticker.to_string(),
        company_name: company_name.to_string(),
        close_price: 58300.0,
        turtle_signal: signal,
        canslim_score: 4.0,
    }
}

/// Three qualifying stocks; two buy signals, two exit signals and one
/// signal that belongs to neither table
pub fn sample_document() -> ScreenerResult {
    ScreenerResult {
        last_updated: "2025-03-14 16:05:00 KST".to_string(),
        cansl_passed: vec![
            create_test_stock("005930", "삼성전자", 72500.0),
            create_test_stock("000660", "SK하이닉스", 178000.0),
            create_test_stock("035420", "NAVER", 201500.0),
        ],
        turtle_signals: vec![
            create_test_signal("005930", "삼성전자", TurtleSignal::S1Buy),
            create_test_signal("005930", "삼성전자", TurtleSignal::S2Buy),
            create_test_signal("000660", "SK하이닉스", TurtleSignal::S1Exit),
            create_test_signal("035420", "NAVER", TurtleSignal::S2Exit),
            create_test_signal("035420", "NAVER", TurtleSignal::Other("S3_Watch".to_string())),
        ],
    }
}

pub fn sample_json() -> String {
    serde_json::to_string_pretty(&sample_document()).expect("fixture serializes")
}

/// Document whose text fields carry markup
pub fn hostile_json() -> String {
    serde_json::json!({
        "last_updated": "<i>today</i>",
        "cansl_passed": [
            {"Ticker": "<script>alert('x')</script>", "CompanyName": "<b>Evil</b> & Sons", "ClosePrice": 100}
        ],
        "turtle_signals": [
            {"Ticker": "<script>alert('x')</script>", "CompanyName": "<b>Evil</b> & Sons",
             "ClosePrice": 100, "CANSLIM_Score": 3, "Turtle_Signal": "S1_Buy"}
        ]
    })
    .to_string()
}

pub fn empty_json() -> String {
    r#"{"last_updated": "2025-03-14 16:05:00 KST", "cansl_passed": [], "turtle_signals": []}"#.to_string()
}
