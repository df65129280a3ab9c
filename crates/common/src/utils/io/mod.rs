/// File system operations and utilities.
pub mod file;

/// Macros for progress output.
pub mod macros;
