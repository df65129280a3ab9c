/// Formats a USD unit price with eight fractional digits.
pub fn format_unit_price(price: f64) -> String {
    format!("{price:.8}")
}

/// Quotes a CSV field when it contains a separator, a quote, or a line break.
///
/// ```
/// use tronex_common::utils::strings::csv_escape;
///
/// assert_eq!(csv_escape("plain"), "plain");
/// assert_eq!(csv_escape("a,b"), "\"a,b\"");
/// assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
