use serde::Serialize;
use std::fmt;

use super::TransactionRecord;

/// Why pagination for an address stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FetchOutcome {
    /// The explorer returned an empty page or no `data` field
    Exhausted,
    /// A page came back shorter than the page limit
    LastPage,
    /// The per-address record ceiling was exceeded; later records were not fetched
    Ceiling,
    /// A request failed; records from earlier pages are kept
    Failed(String),
}

impl FetchOutcome {
    /// Whether every record in the window was fetched.
    pub fn is_complete(&self) -> bool {
        matches!(self, FetchOutcome::Exhausted | FetchOutcome::LastPage)
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Exhausted => write!(f, "exhausted"),
            FetchOutcome::LastPage => write!(f, "last page"),
            FetchOutcome::Ceiling => write!(f, "record ceiling reached"),
            FetchOutcome::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

/// The records fetched for one address, and how the fetch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressResult {
    /// Records, newest first
    pub records: Vec<TransactionRecord>,
    /// Why pagination stopped
    pub outcome: FetchOutcome,
    /// Number of pages requested, including a failed one
    pub pages: usize,
}

/// Per-address summary of a batch fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressOutcome {
    /// The queried address
    pub address: String,
    /// Number of records it contributed
    pub records: usize,
    /// Why pagination stopped
    pub outcome: FetchOutcome,
}

/// Result of fetching several addresses over one date window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportResult {
    /// Every address's records, in address order
    pub records: Vec<TransactionRecord>,
    /// One entry per address, in the order given
    pub outcomes: Vec<AddressOutcome>,
    /// Inclusive start of the window, in milliseconds
    pub start_timestamp: i64,
    /// Exclusive end of the window, in milliseconds
    pub end_timestamp: i64,
}

impl ExportResult {
    /// Whether any record carries a USD valuation.
    pub fn is_enriched(&self) -> bool {
        self.records.iter().any(TransactionRecord::is_enriched)
    }

    /// Addresses whose fetch failed.
    pub fn failed(&self) -> impl Iterator<Item = &AddressOutcome> {
        self.outcomes.iter().filter(|o| matches!(o.outcome, FetchOutcome::Failed(_)))
    }

    /// The records as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}

/// Result of looking up transactions by hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    /// Records of every transaction found, in hash order
    pub records: Vec<TransactionRecord>,
    /// Hashes that were unknown or whose lookup failed
    pub missing: Vec<String>,
}
