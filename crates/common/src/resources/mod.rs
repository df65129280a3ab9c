/// CoinGecko API integration for historical USD prices.
pub mod coingecko;

/// TronScan API integration for address transaction history.
pub mod tronscan;
