//! Formatting helpers shared by the table renderers

/// Format a close price as whole currency units with thousands separators,
/// e.g. `₩72,500`. Non-finite prices render as `-`.
pub fn format_price(price: f64, currency_symbol: &str) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }

    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}{}{}", sign, currency_symbol, group_thousands(&digits))
}

/// Format a CANSLIM score: whole scores without decimals, otherwise one decimal
pub fn format_score(score: f64) -> String {
    if !score.is_finite() {
        "-".to_string()
    } else if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
