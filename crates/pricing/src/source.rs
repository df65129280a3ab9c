use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;
use tronex_common::resources::coingecko::CoinGeckoClient;

use crate::error::Error;

/// Somewhere daily USD prices can be looked up.
#[async_trait]
pub trait HistoricalPriceSource: Debug + Send + Sync {
    /// The USD price of `coin_id` on `day`, or `None` when the source has no figure for it.
    async fn usd_price(&self, coin_id: &str, day: NaiveDate) -> Result<Option<f64>, Error>;
}

#[async_trait]
impl HistoricalPriceSource for CoinGeckoClient {
    async fn usd_price(&self, coin_id: &str, day: NaiveDate) -> Result<Option<f64>, Error> {
        Ok(self.usd_price_on(coin_id, day).await?)
    }
}

#[async_trait]
impl<T: HistoricalPriceSource + ?Sized> HistoricalPriceSource for Box<T> {
    async fn usd_price(&self, coin_id: &str, day: NaiveDate) -> Result<Option<f64>, Error> {
        (**self).usd_price(coin_id, day).await
    }
}
