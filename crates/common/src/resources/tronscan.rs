//! TronScan explorer API: one page of an address's transaction history.

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::{
    constants::{EXPLORER_REQUEST_TIMEOUT_SECS, TRANSACTION_SORT},
    utils::http::{build_client, get_json},
    Error,
};

/// Token metadata block attached to token transfers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenInfo {
    /// Full token name, e.g. `Tether USD`
    pub token_name: Option<String>,
    /// Token ticker, e.g. `USDT`
    pub token_abbr: Option<String>,
    /// Decimal scale reported by the explorer
    pub token_decimal: Option<u32>,
}

/// Contract parameters of the transaction, only the amount is used
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractData {
    /// Transferred amount, in the token's smallest unit
    #[serde(deserialize_with = "string_or_number")]
    pub amount: Option<String>,
}

/// Resource cost of the transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    /// Bandwidth fee paid, in sun
    #[serde(deserialize_with = "string_or_number")]
    pub net_fee: Option<String>,
}

/// One TRC-20 transfer emitted by a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trc20Transfer {
    /// Token ticker, e.g. `USDT`
    pub symbol: Option<String>,
    /// Full token name
    pub name: Option<String>,
    /// Token contract address
    pub contract_address: Option<String>,
    /// Transferred amount, in the token's smallest unit
    #[serde(deserialize_with = "string_or_number")]
    pub amount_str: Option<String>,
    /// Decimal scale reported by the explorer
    pub decimals: Option<u32>,
    /// Sender address
    pub from_address: Option<String>,
    /// Receiver address
    pub to_address: Option<String>,
}

/// A transaction exactly as the explorer returns it. Every field is optional; defaults are
/// applied when the record is normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTransaction {
    /// Transaction hash
    pub hash: Option<String>,
    /// Block number
    pub block: Option<u64>,
    /// Block timestamp in milliseconds
    pub timestamp: Option<i64>,
    /// Sender address
    pub owner_address: Option<String>,
    /// Receiver address
    pub to_address: Option<String>,
    /// Transferred amount, preferred source
    #[serde(deserialize_with = "string_or_number")]
    pub amount: Option<String>,
    /// Transferred amount, secondary source
    #[serde(deserialize_with = "string_or_number")]
    pub value: Option<String>,
    /// Contract parameters, last amount source
    pub contract_data: Option<ContractData>,
    /// Token metadata, absent for native transfers
    pub token_info: Option<TokenInfo>,
    /// Contract address of the token or called contract
    pub contract_address: Option<String>,
    /// Resource cost
    pub cost: Option<Cost>,
    /// Whether the transaction is confirmed
    pub confirmed: Option<bool>,
    /// Numeric contract type code
    pub contract_type: Option<i64>,
    /// TRC-20 transfers emitted by the transaction
    #[serde(rename = "trc20TransferInfo")]
    pub trc20_transfer_info: Option<Vec<Trc20Transfer>>,
}

/// One page of the `/transaction` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPage {
    /// The page's transactions; `None` when the field is missing from the response
    pub data: Option<Vec<RawTransaction>>,
    /// Total matching transactions, when the explorer reports it
    #[serde(default)]
    pub total: Option<u64>,
}

/// Query for one page of an address's transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery<'a> {
    /// The address whose history is requested
    pub address: &'a str,
    /// Window start, inclusive, in milliseconds
    pub start_timestamp: i64,
    /// Window end, exclusive, in milliseconds
    pub end_timestamp: i64,
    /// Offset of the first record
    pub start: usize,
    /// Page size
    pub limit: usize,
}

impl TransactionQuery<'_> {
    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("address", self.address.to_string()),
            ("start_timestamp", self.start_timestamp.to_string()),
            ("end_timestamp", self.end_timestamp.to_string()),
            ("start", self.start.to_string()),
            ("limit", self.limit.to_string()),
            ("sort", TRANSACTION_SORT.to_string()),
        ]
    }
}

/// HTTP client for the TronScan API
#[derive(Debug, Clone)]
pub struct TronScanClient {
    base_url: String,
    client: Client,
    request_delay: Duration,
}

impl TronScanClient {
    /// Creates a client for `base_url`. The API key, when present, is sent as a bearer token.
    /// `request_delay` is slept before every request.
    pub fn new(base_url: &str, api_key: Option<&str>, request_delay: Duration) -> Result<Self, Error> {
        if base_url.trim().is_empty() {
            return Err(Error::Generic("TronScan API base URL is not set".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            client: build_client(Duration::from_secs(EXPLORER_REQUEST_TIMEOUT_SECS), api_key)?,
            request_delay,
        })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of transactions.
    pub async fn transaction_page(
        &self,
        query: &TransactionQuery<'_>,
    ) -> Result<TransactionPage, Error> {
        self.pace().await;
        debug!(
            "fetching transactions for {} at offset {} (limit {})",
            query.address, query.start, query.limit
        );
        get_json(&self.client, &format!("{}/transaction", self.base_url), &query.params()).await
    }

    /// Fetches a single transaction by hash. The explorer answers an unknown hash with an object
    /// that has no `hash` field, which is returned as `Ok(None)`.
    pub async fn transaction_info(&self, hash: &str) -> Result<Option<RawTransaction>, Error> {
        self.pace().await;
        debug!("fetching transaction {}", hash);

        let raw: RawTransaction = get_json(
            &self.client,
            &format!("{}/transaction-info", self.base_url),
            &[("hash", hash.to_string())],
        )
        .await?;

        Ok(raw.hash.is_some().then_some(raw))
    }

    async fn pace(&self) {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
    }
}

/// Accepts a JSON string or number and keeps it as a string. Anything else is treated as absent.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_transaction_accepts_numbers_and_strings() {
        let raw: RawTransaction = serde_json::from_str(
            r#"{
                "hash": "abc",
                "block": 60000000,
                "timestamp": 1704067200000,
                "ownerAddress": "TRaa8yHXzJ5FoVqJNxzBFtbUNKaVwXx5E1",
                "toAddress": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
                "amount": 1500000,
                "value": "2000000",
                "contractData": { "amount": "42", "owner_address": "x" },
                "tokenInfo": { "tokenName": "Tether USD", "tokenAbbr": "USDT", "tokenDecimal": 6 },
                "cost": { "net_fee": 345 },
                "confirmed": true,
                "contractType": 31,
                "riskTransaction": false
            }"#,
        )
        .expect("failed to parse raw transaction");

        assert_eq!(raw.amount.as_deref(), Some("1500000"));
        assert_eq!(raw.value.as_deref(), Some("2000000"));
        assert_eq!(raw.contract_data.and_then(|c| c.amount).as_deref(), Some("42"));
        assert_eq!(raw.cost.and_then(|c| c.net_fee).as_deref(), Some("345"));
        assert_eq!(raw.token_info.and_then(|t| t.token_decimal), Some(6));
        assert_eq!(raw.contract_type, Some(31));
    }

    #[test]
    fn test_raw_transaction_tolerates_missing_and_null_fields() {
        let raw: RawTransaction =
            serde_json::from_str(r#"{ "hash": "abc", "amount": null, "tokenInfo": {} }"#)
                .expect("failed to parse raw transaction");

        assert_eq!(raw.amount, None);
        assert_eq!(raw.confirmed, None);
        assert_eq!(raw.token_info, Some(TokenInfo::default()));
    }

    #[test]
    fn test_amounts_beyond_u64_keep_every_digit() {
        let raw: RawTransaction = serde_json::from_str(
            r#"{
                "amount": 25000000000000000000,
                "value": 340282366920938463463374607431768211456,
                "contractData": { "amount": 1.5 },
                "contractAddress": "TAFjULxiVgT4qWk6UZwjqwZXTSaGaqnVp4"
            }"#,
        )
        .expect("failed to parse raw transaction");

        assert_eq!(raw.amount.as_deref(), Some("25000000000000000000"));
        assert_eq!(raw.value.as_deref(), Some("340282366920938463463374607431768211456"));
        assert_eq!(raw.contract_data.and_then(|c| c.amount).as_deref(), Some("1.5"));
    }

    #[test]
    fn test_trc20_transfer_info() {
        let raw: RawTransaction = serde_json::from_str(
            r#"{
                "hash": "abc",
                "contractType": 31,
                "trc20TransferInfo": [{
                    "symbol": "usdt",
                    "name": "Tether USD",
                    "contract_address": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
                    "amount_str": "20000000000",
                    "decimals": 6,
                    "from_address": "TRaa8yHXzJ5FoVqJNxzBFtbUNKaVwXx5E1",
                    "to_address": "TEkxiTehnzSmSe2XqrBj4w32RUN966rdz8",
                    "tokenType": "trc20"
                }]
            }"#,
        )
        .expect("failed to parse raw transaction");

        let transfers = raw.trc20_transfer_info.expect("transfers");
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].symbol.as_deref(), Some("usdt"));
        assert_eq!(transfers[0].amount_str.as_deref(), Some("20000000000"));
        assert_eq!(transfers[0].decimals, Some(6));
        assert_eq!(transfers[0].to_address.as_deref(), Some("TEkxiTehnzSmSe2XqrBj4w32RUN966rdz8"));
    }

    #[test]
    fn test_page_without_data_field() {
        let page: TransactionPage =
            serde_json::from_str(r#"{ "message": "rate limited" }"#).expect("failed to parse page");
        assert!(page.data.is_none());
    }

    #[test]
    fn test_query_params() {
        let query = TransactionQuery {
            address: "TRaa8yHXzJ5FoVqJNxzBFtbUNKaVwXx5E1",
            start_timestamp: 1704067200000,
            end_timestamp: 1704240000000,
            start: 400,
            limit: 200,
        };
        let params = query.params();

        assert!(params.contains(&("start", "400".to_string())));
        assert!(params.contains(&("limit", "200".to_string())));
        assert!(params.contains(&("sort", "-timestamp".to_string())));
        assert!(params.contains(&("end_timestamp", "1704240000000".to_string())));
    }

    #[test]
    fn test_client_requires_base_url() {
        assert!(TronScanClient::new("  ", None, Duration::ZERO).is_err());

        let client = TronScanClient::new("https://apilist.tronscanapi.com/api/", None, Duration::ZERO)
            .expect("failed to build client");
        assert_eq!(client.base_url(), "https://apilist.tronscanapi.com/api");
    }
}
