//! Common utilities, constants, and resources used across the tronex codebase.
//!
//! This crate provides shared functionality for the tronex toolkit, including
//! static TRON token metadata, the explorer and price-provider HTTP resources,
//! and general utility functions.

/// Constants used throughout the tronex codebase.
pub mod constants;

/// Error types shared by the common resources.
pub mod error;

/// External resources and API integrations, such as TronScan and CoinGecko.
pub mod resources;

/// Lookups over the static token metadata tables.
pub mod tokens;

/// General utility functions and types for common tasks.
pub mod utils;

pub use error::Error;
