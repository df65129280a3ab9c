use async_trait::async_trait;
use tronex_common::resources::tronscan::{
    RawTransaction, TransactionPage, TransactionQuery, TronScanClient,
};

use crate::error::Error;

/// Somewhere transactions can be fetched from, by address page or by hash.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetches one page of transactions.
    async fn transaction_page(&self, query: &TransactionQuery<'_>) -> Result<TransactionPage, Error>;

    /// Fetches a single transaction, `Ok(None)` when the hash is unknown.
    async fn transaction_info(&self, hash: &str) -> Result<Option<RawTransaction>, Error>;
}

#[async_trait]
impl TransactionSource for TronScanClient {
    async fn transaction_page(&self, query: &TransactionQuery<'_>) -> Result<TransactionPage, Error> {
        Ok(TronScanClient::transaction_page(self, query).await?)
    }

    async fn transaction_info(&self, hash: &str) -> Result<Option<RawTransaction>, Error> {
        Ok(TronScanClient::transaction_info(self, hash).await?)
    }
}
