use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parses a non-negative amount written as an integer, a decimal fraction, or in exponent form.
///
/// ```
/// use rust_decimal::Decimal;
/// use tronex_common::utils::decimal::parse_amount;
///
/// assert_eq!(parse_amount("1500000"), Some(Decimal::from(1_500_000)));
/// assert_eq!(parse_amount("2.5e+19"), parse_amount("25000000000000000000"));
/// assert_eq!(parse_amount("-5"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let amount = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)).ok()?;
    (!amount.is_sign_negative()).then_some(amount)
}

/// `raw` divided by `10^decimals`, with trailing fractional zeros removed. `None` when `raw` is
/// not a non-negative number or the quotient does not fit a [`Decimal`].
pub fn scale_decimal(raw: &str, decimals: u32) -> Option<Decimal> {
    let divisor = 10_u64.checked_pow(decimals).map(Decimal::from)?;
    parse_amount(raw)?.checked_div(divisor).map(|amount| amount.normalize())
}

/// The exact scaled amount as a plain decimal string. Anything that cannot be scaled is `"0"`.
///
/// ```
/// use tronex_common::utils::decimal::scale_amount;
///
/// assert_eq!(scale_amount("20000000000", 6), "20000");
/// assert_eq!(scale_amount("1500000", 6), "1.5");
/// assert_eq!(scale_amount("5", 6), "0.000005");
/// ```
pub fn scale_amount(raw: &str, decimals: u32) -> String {
    scale_decimal(raw, decimals).unwrap_or_default().to_string()
}

/// Formats a USD value rounded half away from zero to two fractional digits.
pub fn format_usd(value: Decimal) -> String {
    format!("{:.2}", value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
