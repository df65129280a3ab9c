use chrono::NaiveDate;
use serde::Serialize;
use std::{collections::HashMap, fmt, time::Duration};
use tracing::{debug, info, warn};
use tronex_common::{
    constants::PRICE_REQUEST_DELAY_MS,
    tokens::{coingecko_id, fallback_price},
    utils::time::{millis_to_day, parse_date},
};

use crate::{error::Error, source::HistoricalPriceSource};

/// A [`PriceLookup`] over any boxed source.
pub type DynPriceLookup = PriceLookup<Box<dyn HistoricalPriceSource>>;

/// Where a quoted price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceSource {
    /// Answered from the same-day cache
    Cache,
    /// Fetched from the price provider
    Live,
    /// Taken from the static fallback table
    Fallback,
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceSource::Cache => write!(f, "cache"),
            PriceSource::Live => write!(f, "live"),
            PriceSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// A USD unit price and its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    /// USD per whole token, never negative
    pub usd: f64,
    /// Where the price came from
    pub source: PriceSource,
}

/// Historical price lookups with a per-day cache.
///
/// Prices are treated as constant within a UTC calendar day, so every `(symbol, day)` pair
/// reaches the provider at most once for the lifetime of the lookup. Failures are never
/// surfaced: the static fallback table answers instead.
#[derive(Debug)]
pub struct PriceLookup<S> {
    source: S,
    cache: HashMap<(String, NaiveDate), f64>,
    request_delay: Duration,
}

impl<S: HistoricalPriceSource> PriceLookup<S> {
    /// A lookup backed by `source`, pausing one second before every provider request.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
            request_delay: Duration::from_millis(PRICE_REQUEST_DELAY_MS),
        }
    }

    /// Sets the pause before every provider request.
    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }

    /// The USD unit price of `symbol` at `timestamp_ms`, with its provenance.
    pub async fn quote(&mut self, symbol: &str, timestamp_ms: i64) -> PriceQuote {
        let symbol = symbol.trim().to_uppercase();

        let Some(day) = millis_to_day(timestamp_ms) else {
            warn!("timestamp {} is out of range, using fallback price for {}", timestamp_ms, symbol);
            return fallback_quote(&symbol);
        };

        self.quote_on(symbol, day).await
    }

    /// The USD unit price of `symbol` at `timestamp_ms`.
    pub async fn historical_price(&mut self, symbol: &str, timestamp_ms: i64) -> f64 {
        self.quote(symbol, timestamp_ms).await.usd
    }

    /// The USD unit price of `symbol` on a `YYYY-MM-DD` date.
    pub async fn quote_on_date(&mut self, symbol: &str, date: &str) -> Result<PriceQuote, Error> {
        let day = parse_date(date)?;
        Ok(self.quote_on(symbol.trim().to_uppercase(), day).await)
    }

    async fn quote_on(&mut self, symbol: String, day: NaiveDate) -> PriceQuote {
        let key = (symbol, day);
        if let Some(usd) = self.cache.get(&key) {
            debug!("price cache hit for {} on {}", key.0, day);
            return PriceQuote { usd: *usd, source: PriceSource::Cache };
        }

        let quote = self.resolve(&key.0, day).await;
        self.cache.insert(key, quote.usd);
        quote
    }

    async fn resolve(&self, symbol: &str, day: NaiveDate) -> PriceQuote {
        let Some(coin_id) = coingecko_id(symbol) else {
            debug!("no price provider id for {}, using fallback price", symbol);
            return fallback_quote(symbol);
        };

        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        match self.source.usd_price(coin_id, day).await {
            Ok(Some(usd)) if usd.is_finite() && usd >= 0.0 => {
                info!("historical price for {} on {}: ${:.8}", symbol, day, usd);
                PriceQuote { usd, source: PriceSource::Live }
            }
            Ok(_) => {
                warn!("no USD price for {} on {}, using fallback price", symbol, day);
                fallback_quote(symbol)
            }
            Err(e) => {
                warn!("failed to fetch historical price for {} on {}: {}", symbol, day, e);
                fallback_quote(symbol)
            }
        }
    }

    /// Drops every cached price.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached `(symbol, day)` prices.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl<S: HistoricalPriceSource + 'static> PriceLookup<S> {
    /// Erases the source type, keeping the cache and request delay.
    pub fn boxed(self) -> DynPriceLookup {
        PriceLookup {
            source: Box::new(self.source),
            cache: self.cache,
            request_delay: self.request_delay,
        }
    }
}

fn fallback_quote(symbol: &str) -> PriceQuote {
    PriceQuote { usd: fallback_price(symbol), source: PriceSource::Fallback }
}
