//! Historical USD prices for TRON ecosystem tokens.
//!
//! [`PriceLookup`] answers "what was one `symbol` worth in USD at this timestamp", backed by
//! a same-day cache and a static fallback table. The provider sits behind
//! [`HistoricalPriceSource`]; [`CoinGeckoClient`] is the production implementation.

/// Error types for the price lookup module
pub mod error;

mod lookup;
mod source;
mod valuation;

pub use lookup::{DynPriceLookup, PriceLookup, PriceQuote, PriceSource};
pub use source::HistoricalPriceSource;
pub use tronex_common::resources::coingecko::CoinGeckoClient;
pub use valuation::UsdValuation;

/// A lookup against the CoinGecko API at `base_url`, or the public API when it is blank.
pub fn coingecko_lookup(base_url: &str) -> Result<PriceLookup<CoinGeckoClient>, error::Error> {
    Ok(PriceLookup::new(CoinGeckoClient::new(base_url)?))
}
