use crate::constants::{ADDRESS_REGEX, DATE_REGEX, HASH_REGEX};

use super::time::parse_date;

/// Whether the input looks like a base58 TRON address.
///
/// ```
/// use tronex_common::utils::validate::is_valid_address;
///
/// assert!(is_valid_address("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"));
/// assert!(!is_valid_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"));
/// ```
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_REGEX.is_match(address).unwrap_or(false)
}

/// Whether the input looks like a transaction hash.
pub fn is_valid_hash(hash: &str) -> bool {
    HASH_REGEX.is_match(hash).unwrap_or(false)
}

/// Whether the input is a real calendar date in `YYYY-MM-DD` form.
pub fn is_valid_date(date: &str) -> bool {
    DATE_REGEX.is_match(date).unwrap_or(false) && parse_date(date).is_ok()
}
