pub(crate) mod args;
pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use args::{Arguments, Subcommands};
use clap::Parser;
use colored::Colorize;
use error::Error;
use output::{build_output_path, export_filename, print_with_less};
use tracing::{info, warn};

use tronex_common::utils::{
    io::file::{short_path, write_lines_to_file},
    strings::format_unit_price,
};
use tronex_config::{config, Configuration};
use tronex_core::{
    error::Error as CoreError,
    tronex_pricing::coingecko_lookup,
    tronex_transactions::{export, lookup, render_csv},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;

    // setup logging
    let _guard = args
        .logs
        .init_tracing(&configuration.log_file)
        .map_err(|e| Error::Generic(format!("failed to initialize logging: {}", e)))?;

    match args.sub {
        Subcommands::Export(mut cmd) => {
            // fill connection settings the user didn't pass from the configuration
            if cmd.api_url.is_empty() {
                cmd.api_url =
                    configuration.require_tronscan_api_base_url().map_err(CoreError::from)?.to_string();
            }
            if cmd.api_key.is_empty() {
                cmd.api_key = configuration.tronscan_api_key().unwrap_or_default().to_string();
            }
            if cmd.coingecko_url.is_empty() {
                cmd.coingecko_url = configuration.coingecko_api_base_url.clone();
            }
            if cmd.rate_limit_delay.is_none() {
                cmd.rate_limit_delay = Some(configuration.api_rate_limit_delay);
            }

            let result = export(cmd.clone()).await.map_err(CoreError::from)?;

            for outcome in result.outcomes.iter().filter(|o| !o.outcome.is_complete()) {
                warn!("{}: {} ({} records kept)", outcome.address, outcome.outcome, outcome.records);
            }

            let lines = render_csv(&result.records, cmd.enrich);
            if cmd.output == "print" {
                print_with_less(&lines.join("\n"))
                    .await
                    .map_err(|e| Error::Generic(format!("failed to print transactions: {}", e)))?;
            } else {
                let filename = export_filename(&cmd.name, &cmd.date_from, &cmd.date_to);
                let output_path = build_output_path(&cmd.output, &filename)
                    .map_err(|e| Error::Generic(format!("failed to build output path: {}", e)))?;

                write_lines_to_file(&output_path, lines)
                    .map_err(|e| Error::Generic(format!("failed to write transactions: {}", e)))?;
                info!(
                    "wrote {} transactions to {}",
                    result.records.len(),
                    short_path(&output_path)
                );
            }
        }

        Subcommands::Hash(mut cmd) => {
            if cmd.api_url.is_empty() {
                cmd.api_url =
                    configuration.require_tronscan_api_base_url().map_err(CoreError::from)?.to_string();
            }
            if cmd.api_key.is_empty() {
                cmd.api_key = configuration.tronscan_api_key().unwrap_or_default().to_string();
            }
            if cmd.coingecko_url.is_empty() {
                cmd.coingecko_url = configuration.coingecko_api_base_url.clone();
            }
            if cmd.rate_limit_delay.is_none() {
                cmd.rate_limit_delay = Some(configuration.api_rate_limit_delay);
            }

            let result = lookup(cmd.clone()).await.map_err(CoreError::from)?;
            for hash in &result.missing {
                warn!("{}: not found", hash);
            }

            for line in render_csv(&result.records, cmd.enrich) {
                println!("{line}");
            }
        }

        Subcommands::Price(cmd) => {
            let base_url = if cmd.coingecko_url.is_empty() {
                configuration.coingecko_api_base_url
            } else {
                cmd.coingecko_url
            };

            let mut prices = coingecko_lookup(&base_url).map_err(CoreError::from)?;
            let quote =
                prices.quote_on_date(&cmd.symbol, &cmd.date).await.map_err(CoreError::from)?;

            println!(
                "{} on {}: ${} {}",
                cmd.symbol.to_uppercase().bold(),
                cmd.date.trim(),
                format_unit_price(quote.usd),
                format!("({})", quote.source).dimmed()
            );
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(CoreError::from)?;
        }
    }

    Ok(())
}
