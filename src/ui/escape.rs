//! HTML escaping for values interpolated into table markup.
//!
//! Ticker symbols and company names come straight from the result document
//! and must never be interpreted as markup.

/// Escape a string for safe inclusion in HTML content or a quoted attribute.
///
/// ```
/// use screener_ui::ui::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('x')</script>"),
///     "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
