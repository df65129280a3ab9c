/// Exact decimal scaling and formatting of token amounts.
pub mod decimal;

/// Environment variable utilities.
pub mod env;

/// HTTP request and response handling utilities.
pub mod http;

/// Integer manipulation and formatting utilities.
pub mod integers;

/// Input/output utilities for file manipulation and progress output.
pub mod io;

/// String manipulation and formatting utilities.
pub mod strings;

/// Date and time conversion utilities.
pub mod time;

/// Input validation for addresses and dates.
pub mod validate;
