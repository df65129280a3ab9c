//! CoinGecko API: a coin's USD price on a given day.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    constants::{DEFAULT_COINGECKO_API_BASE_URL, PRICE_REQUEST_TIMEOUT_SECS},
    utils::{
        http::{build_client, get_json},
        time::coingecko_date,
    },
    Error,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CoinHistory {
    market_data: Option<MarketData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MarketData {
    current_price: Option<CurrentPrice>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurrentPrice {
    usd: Option<f64>,
}

impl CoinHistory {
    fn usd(&self) -> Option<f64> {
        self.market_data.as_ref()?.current_price.as_ref()?.usd
    }
}

/// HTTP client for the CoinGecko history endpoint
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    base_url: String,
    client: Client,
}

impl CoinGeckoClient {
    /// Creates a client for `base_url`, or the public API when it is blank.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = match base_url.trim() {
            "" => DEFAULT_COINGECKO_API_BASE_URL,
            url => url,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_client(Duration::from_secs(PRICE_REQUEST_TIMEOUT_SECS), None)?,
        })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the USD price of `coin_id` on `day`. Returns `Ok(None)` when the response has no
    /// `market_data.current_price.usd` figure, which CoinGecko does for days before a coin listed.
    pub async fn usd_price_on(&self, coin_id: &str, day: NaiveDate) -> Result<Option<f64>, Error> {
        let url = format!("{}/coins/{}/history", self.base_url, coin_id);
        let query = [("date", coingecko_date(day)), ("localization", "false".to_string())];

        let history: CoinHistory = get_json(&self.client, &url, &query).await?;
        let price = history.usd();
        debug!("coingecko {} on {}: {:?}", coin_id, day, price);

        Ok(price)
    }
}
