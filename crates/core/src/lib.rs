//! The Core module is the integration point for tronex's functionality: transaction history
//! export and historical price lookups for TRON addresses.
//!
//! This module re-exports the public interfaces of the module crates, making it easier to use
//! tronex in other projects.

/// Error types for the core module
pub mod error;

// Re-export all module crates
pub use tronex_pricing;
pub use tronex_transactions;
