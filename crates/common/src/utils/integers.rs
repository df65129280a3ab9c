use rust_decimal::Decimal;

use super::decimal::format_usd;

/// Trait for formatting numbers with thousands separators.
pub trait ToLocaleString {
    /// Formats a number with commas as thousands separators.
    fn to_locale_string(&self) -> String;
}

impl ToLocaleString for usize {
    /// Add commas every 3 digits, e.g. 1000000 -> 1,000,000.
    ///
    /// ```
    /// use tronex_common::utils::integers::ToLocaleString;
    ///
    /// assert_eq!(1000000usize.to_locale_string(), "1,000,000");
    /// ```
    fn to_locale_string(&self) -> String {
        group_thousands(&self.to_string())
    }
}

impl ToLocaleString for Decimal {
    /// Two fractional digits with grouped integer part, e.g. 1234.5 -> 1,234.50.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use tronex_common::utils::integers::ToLocaleString;
    ///
    /// assert_eq!(Decimal::new(12345, 1).to_locale_string(), "1,234.50");
    /// ```
    fn to_locale_string(&self) -> String {
        let fixed = format_usd(self.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if self.is_sign_negative() && fixed != "0.00" { "-" } else { "" };
        format!("{sign}{}.{frac_part}", group_thousands(int_part))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, c) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
