use serde::{Deserialize, Serialize};
use std::fmt;
use tronex_pricing::UsdValuation;

/// Whether the explorer marked the transaction as confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Confirmed
    Success,
    /// Not confirmed, or no confirmation flag reported
    Failed,
}

impl From<Option<bool>> for TransactionStatus {
    fn from(confirmed: Option<bool>) -> Self {
        if confirmed == Some(true) {
            TransactionStatus::Success
        } else {
            TransactionStatus::Failed
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Success => write!(f, "SUCCESS"),
            TransactionStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// A normalized transaction, as handed to the output sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The address whose history this record was fetched for
    pub wallet: String,
    /// Transaction hash
    pub hash: String,
    /// Block number, `0` when unknown
    pub block_number: u64,
    /// Block timestamp in milliseconds, `0` when unknown
    pub timestamp: i64,
    /// Sender address
    pub from_address: String,
    /// Receiver address
    pub to_address: String,
    /// Raw amount in the token's smallest unit, kept as a string to stay exact
    pub value: String,
    /// `value` scaled by the token's decimals
    pub amount: String,
    /// Token name, `TRX` for native transfers
    pub token_name: String,
    /// Resolved token symbol
    pub token_symbol: String,
    /// The decimal scale `amount` was computed with
    pub decimals: u32,
    /// Contract address of the token or called contract
    pub contract_address: String,
    /// Bandwidth fee in sun
    pub fee: String,
    /// Confirmation status
    pub status: TransactionStatus,
    /// Contract type label, e.g. `TransferContract` or `Unknown(7)`
    pub transaction_type: String,
    /// `timestamp` as `YYYY-MM-DD HH:MM:SS` UTC
    pub date: String,
    /// USD value at transaction time, two fractional digits. Only set when enriched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<String>,
    /// USD unit price at transaction time, eight fractional digits. Only set when enriched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<String>,
}

impl TransactionRecord {
    /// Attaches the USD valuation of this record at `unit_price` USD per whole token.
    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        let valuation = UsdValuation::new(&self.value, self.decimals, unit_price);
        self.usd_value = Some(valuation.usd_value);
        self.unit_price = Some(valuation.unit_price);
        self
    }

    /// Whether the record carries a USD valuation.
    pub fn is_enriched(&self) -> bool {
        self.usd_value.is_some()
    }
}
