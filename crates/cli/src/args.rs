use clap::{Parser, Subcommand};

use tronex_config::ConfigArgs;
use tronex_core::tronex_transactions::{ExportArgs, LookupArgs};

use crate::log_args::LogArgs;

#[derive(Debug, Parser)]
#[clap(name = "tronex", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    pub(crate) logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "tronex exports the transaction history of TRON addresses, optionally valued in USD."
)]
#[allow(clippy::large_enum_variant)]
pub(crate) enum Subcommands {
    #[clap(name = "export", about = "Export the transaction history of one or more addresses")]
    Export(ExportArgs),

    #[clap(name = "hash", about = "Look up transactions by hash")]
    Hash(LookupArgs),

    #[clap(name = "price", about = "Look up a token's historical USD price")]
    Price(PriceArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

/// Arguments for the price command
#[derive(Debug, Clone, Parser)]
#[clap(override_usage = "tronex price <SYMBOL> <YYYY-MM-DD> [OPTIONS]")]
pub(crate) struct PriceArgs {
    /// The token symbol, e.g. TRX or USDT.
    #[clap(required = true)]
    pub(crate) symbol: String,

    /// The day to price the token on, `YYYY-MM-DD`.
    #[clap(required = true)]
    pub(crate) date: String,

    /// The CoinGecko API base URL. Defaults to the configured one.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub(crate) coingecko_url: String,
}
