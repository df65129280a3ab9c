//! The Transactions module exports an address's TRON transaction history.
//!
//! It pages through the explorer's transaction endpoint for each address, normalizes every
//! record into a flat [`TransactionRecord`], and can enrich each one with its USD value at the
//! time of the transaction. Single transactions can also be looked up by hash.

/// Error types for the transactions module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{
    client::TransactionClient,
    csv::{csv_header, render_csv},
    export, lookup,
    normalize::{normalize, normalize_transfers},
    source::TransactionSource,
};
pub use error::Error;
pub use interfaces::{
    AddressOutcome, AddressResult, ExportArgs, ExportArgsBuilder, ExportResult, FetchOutcome,
    LookupArgs, LookupArgsBuilder, LookupResult, TransactionRecord, TransactionStatus,
};
