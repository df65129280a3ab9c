use crate::constants::{
    COINGECKO_IDS, CONTRACT_TYPES, FALLBACK_PRICES, NATIVE_DECIMALS, TOKEN_CONTRACTS,
    TOKEN_DECIMALS,
};

/// Returns the CoinGecko coin id for an uppercase symbol, if one is known.
///
/// ```
/// use tronex_common::tokens::coingecko_id;
///
/// assert_eq!(coingecko_id("USDT"), Some("tether"));
/// assert_eq!(coingecko_id("DOGE"), None);
/// ```
pub fn coingecko_id(symbol: &str) -> Option<&'static str> {
    COINGECKO_IDS.iter().find(|(s, _)| *s == symbol).map(|(_, id)| *id)
}

/// Returns the decimal scale registered for an uppercase symbol.
pub fn token_decimals(symbol: &str) -> Option<u32> {
    TOKEN_DECIMALS.iter().find(|(s, _)| *s == symbol).map(|(_, d)| *d)
}

/// Returns the symbol registered for a TRC-20 contract address.
///
/// ```
/// use tronex_common::tokens::symbol_for_contract;
///
/// assert_eq!(symbol_for_contract("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"), Some("USDT"));
/// ```
pub fn symbol_for_contract(contract_address: &str) -> Option<&'static str> {
    TOKEN_CONTRACTS.iter().find(|(c, _)| *c == contract_address).map(|(_, s)| *s)
}

/// Returns the static USD price for a symbol, `0.0` when the symbol is unknown.
///
/// ```
/// use tronex_common::tokens::fallback_price;
///
/// assert_eq!(fallback_price("USDJ"), 1.0);
/// assert_eq!(fallback_price("NOPE"), 0.0);
/// ```
pub fn fallback_price(symbol: &str) -> f64 {
    FALLBACK_PRICES.iter().find(|(s, _)| *s == symbol).map(|(_, p)| *p).unwrap_or(0.0)
}

/// Resolves the decimal scale for a symbol that has already been resolved
/// against the contract table. Unknown symbols use the token-supplied scale,
/// then the native scale.
pub fn resolve_decimals(symbol: &str, token_supplied: Option<u32>) -> u32 {
    token_decimals(symbol).or(token_supplied).unwrap_or(NATIVE_DECIMALS)
}

/// Maps an explorer `contractType` code to its label. Unmapped codes become
/// `Unknown(<code>)`.
///
/// ```
/// use tronex_common::tokens::contract_type_label;
///
/// assert_eq!(contract_type_label(31), "TriggerSmartContract");
/// assert_eq!(contract_type_label(7), "Unknown(7)");
/// ```
pub fn contract_type_label(code: i64) -> String {
    CONTRACT_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("Unknown({code})"))
}
