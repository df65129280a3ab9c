mod args;
mod record;
mod result;

pub use args::{ExportArgs, ExportArgsBuilder, LookupArgs, LookupArgsBuilder};
pub use record::{TransactionRecord, TransactionStatus};
pub use result::{AddressOutcome, AddressResult, ExportResult, FetchOutcome, LookupResult};
