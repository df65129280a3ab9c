use clap::Parser;
use derive_builder::Builder;
use eyre::eyre;
use tronex_common::{
    constants::DEFAULT_PAGE_LIMIT,
    utils::{
        io::file::read_file,
        time::{date_range_to_window, parse_date},
        validate::{is_valid_address, is_valid_date, is_valid_hash},
    },
};

use crate::error::Error;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Export the transaction history of one or more TRON addresses",
    override_usage = "tronex export --address <ADDRESS> --date-from <YYYY-MM-DD> --date-to <YYYY-MM-DD> [OPTIONS]"
)]
/// Arguments for the export operation
///
/// Addresses may be given directly, read from a file, or both. The date range is inclusive on
/// both ends and interpreted in UTC.
pub struct ExportArgs {
    /// An address to export. May be repeated.
    #[clap(long = "address", short = 'a', value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// A file of addresses, one per line or in the first CSV column.
    #[clap(long, short = 'f', value_name = "FILE")]
    pub addresses_file: Option<String>,

    /// First day to export, `YYYY-MM-DD`.
    #[clap(long, required = true)]
    pub date_from: String,

    /// Last day to export, `YYYY-MM-DD`.
    #[clap(long, required = true)]
    pub date_to: String,

    /// Attach the USD value of every transfer at the time it happened.
    #[clap(long, short)]
    pub enrich: bool,

    /// Only keep transfers of this token symbol, e.g. USDT.
    #[clap(long, short = 't', value_name = "SYMBOL")]
    pub token: Option<String>,

    /// Records requested per page.
    #[clap(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    pub page_limit: usize,

    /// The TronScan API base URL. Defaults to the configured one.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub api_url: String,

    /// The TronScan API key. Defaults to the configured one.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub api_key: String,

    /// The CoinGecko API base URL. Defaults to the configured one.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub coingecko_url: String,

    /// Seconds to wait before every TronScan request. Defaults to the configured delay.
    #[clap(long, value_name = "SECONDS")]
    pub rate_limit_delay: Option<f64>,

    /// The output directory to write the output to or 'print' to print to the console
    #[clap(long = "output", short, default_value = "output", hide_default_value = true)]
    pub output: String,

    /// The name for the output file
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,
}

impl ExportArgs {
    /// Every address to export, in the order given: `--address` values first, then the
    /// addresses file. Duplicates are dropped. Fails if none are given or any is malformed.
    pub fn resolve_addresses(&self) -> Result<Vec<String>, Error> {
        let mut candidates: Vec<String> =
            self.addresses.iter().map(|a| a.trim().to_string()).collect();

        if let Some(path) = &self.addresses_file {
            let contents = read_file(path)?;
            candidates.extend(parse_address_list(&contents));
        }

        let mut addresses: Vec<String> = Vec::with_capacity(candidates.len());
        for address in candidates {
            if !addresses.contains(&address) {
                addresses.push(address);
            }
        }

        if addresses.is_empty() {
            return Err(Error::InvalidArguments(
                "no addresses given, use --address or --addresses-file".to_string(),
            ));
        }

        let invalid: Vec<&str> =
            addresses.iter().filter(|a| !is_valid_address(a)).map(String::as_str).collect();
        if !invalid.is_empty() {
            return Err(Error::InvalidArguments(format!(
                "invalid TRON address(es): {}",
                invalid.join(", ")
            )));
        }

        Ok(addresses)
    }

    /// The millisecond window covering `date_from` through `date_to`, both inclusive.
    pub fn window(&self) -> Result<(i64, i64), Error> {
        for date in [&self.date_from, &self.date_to] {
            if !is_valid_date(date.trim()) {
                return Err(Error::InvalidArguments(format!(
                    "invalid date '{date}', expected YYYY-MM-DD"
                )));
            }
        }

        let from = parse_date(&self.date_from)?;
        let to = parse_date(&self.date_to)?;
        if from > to {
            return Err(eyre!("date_from {} is after date_to {}", from, to).into());
        }

        Ok(date_range_to_window(&self.date_from, &self.date_to)?)
    }
}

impl ExportArgsBuilder {
    /// Creates a new ExportArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            addresses: Some(Vec::new()),
            addresses_file: Some(None),
            date_from: Some(String::new()),
            date_to: Some(String::new()),
            enrich: Some(false),
            token: Some(None),
            page_limit: Some(DEFAULT_PAGE_LIMIT),
            api_url: Some(String::new()),
            api_key: Some(String::new()),
            coingecko_url: Some(String::new()),
            rate_limit_delay: Some(None),
            output: Some(String::from("output")),
            name: Some(String::new()),
        }
    }
}

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Look up transactions by hash",
    override_usage = "tronex hash <HASH>... [OPTIONS]"
)]
/// Arguments for the hash lookup operation
pub struct LookupArgs {
    /// The transaction hashes to look up.
    #[clap(required = true, value_name = "HASH")]
    pub hashes: Vec<String>,

    /// Only keep transfers of this token symbol, e.g. USDT.
    #[clap(long, short = 't', value_name = "SYMBOL")]
    pub token: Option<String>,

    /// Attach the USD value of every transfer at the time it happened.
    #[clap(long, short)]
    pub enrich: bool,

    /// The TronScan API base URL. Defaults to the configured one.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub api_url: String,

    /// The TronScan API key. Defaults to the configured one.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub api_key: String,

    /// The CoinGecko API base URL. Defaults to the configured one.
    #[clap(long, default_value = "", hide_default_value = true)]
    pub coingecko_url: String,

    /// Seconds to wait before every TronScan request. Defaults to the configured delay.
    #[clap(long, value_name = "SECONDS")]
    pub rate_limit_delay: Option<f64>,
}

impl LookupArgs {
    /// The hashes to look up, trimmed and deduplicated in order. Fails if any is malformed.
    pub fn resolve_hashes(&self) -> Result<Vec<String>, Error> {
        let mut hashes: Vec<String> = Vec::with_capacity(self.hashes.len());
        for hash in self.hashes.iter().map(|h| h.trim().to_string()) {
            if !hashes.contains(&hash) {
                hashes.push(hash);
            }
        }

        let invalid: Vec<&str> =
            hashes.iter().filter(|h| !is_valid_hash(h)).map(String::as_str).collect();
        if hashes.is_empty() || !invalid.is_empty() {
            return Err(Error::InvalidArguments(format!(
                "invalid transaction hash(es): {}",
                invalid.join(", ")
            )));
        }

        Ok(hashes)
    }
}

impl LookupArgsBuilder {
    /// Creates a new LookupArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            hashes: Some(Vec::new()),
            token: Some(None),
            enrich: Some(false),
            api_url: Some(String::new()),
            api_key: Some(String::new()),
            coingecko_url: Some(String::new()),
            rate_limit_delay: Some(None),
        }
    }
}

/// Addresses from a plain list or a CSV whose first column holds them. Blank lines and `#`
/// comments are skipped, as is a first line that doesn't look like an address (a header).
fn parse_address_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split(',').next().unwrap_or_default().trim().trim_matches('"').trim().to_string()
        })
        .enumerate()
        .filter(|(i, address)| *i > 0 || address.starts_with('T'))
        .map(|(_, address)| address)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET_A: &str = "TRaa8yHXzJ5FoVqJNxzBFtbUNKaVwXx5E1";
    const WALLET_B: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

    fn args() -> ExportArgsBuilder {
        let mut builder = ExportArgsBuilder::new();
        builder.date_from("2024-01-01".to_string()).date_to("2024-01-02".to_string());
        builder
    }

    #[test]
    fn test_parse_address_list_skips_header_and_comments() {
        let contents = format!("wallet,label\n{WALLET_A},exchange\n\n# cold\n\"{WALLET_B}\"\n");
        assert_eq!(parse_address_list(&contents), vec![WALLET_A, WALLET_B]);
    }

    #[test]
    fn test_parse_address_list_without_header() {
        let contents = format!("{WALLET_A}\n{WALLET_B}");
        assert_eq!(parse_address_list(&contents), vec![WALLET_A, WALLET_B]);
    }

    #[test]
    fn test_resolve_addresses_dedupes_in_order() {
        let args = args()
            .addresses(vec![WALLET_B.to_string(), WALLET_A.to_string(), WALLET_B.to_string()])
            .build()
            .expect("failed to build args");

        assert_eq!(args.resolve_addresses().expect("valid"), vec![WALLET_B, WALLET_A]);
    }

    #[test]
    fn test_resolve_addresses_reads_file() {
        let path = std::env::temp_dir().join(format!("tronex-addresses-{}.csv", std::process::id()));
        std::fs::write(&path, format!("address\n{WALLET_B}\n{WALLET_A}\n")).expect("write");

        let args = args()
            .addresses(vec![WALLET_A.to_string()])
            .addresses_file(Some(path.to_string_lossy().into_owned()))
            .build()
            .expect("failed to build args");

        assert_eq!(args.resolve_addresses().expect("valid"), vec![WALLET_A, WALLET_B]);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_resolve_addresses_rejects_bad_input() {
        let none = args().build().expect("failed to build args");
        assert!(none.resolve_addresses().is_err());

        let bad = args()
            .addresses(vec!["0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string()])
            .build()
            .expect("failed to build args");
        assert!(bad.resolve_addresses().is_err());
    }

    #[test]
    fn test_window() {
        let base = args().build().expect("failed to build args");
        assert_eq!(base.window().expect("valid window"), (1704067200000, 1704240000000));

        let same_day = args().date_to("2024-01-01".to_string()).build().expect("args");
        assert!(same_day.window().is_ok());

        let reversed = args().date_from("2024-01-03".to_string()).build().expect("args");
        assert!(reversed.window().is_err());

        let malformed = args().date_to("2024/01/02".to_string()).build().expect("args");
        assert!(malformed.window().is_err());

        let unpadded = args().date_from("2024-1-1".to_string()).build().expect("args");
        assert!(matches!(unpadded.window(), Err(Error::InvalidArguments(_))));
    }

    #[test]
    fn test_resolve_hashes() {
        let hash = "1dad52d991ba6963777ae069276e01d67ba6e9786811739cb463b405c51a2213";
        let lookup = LookupArgsBuilder::new()
            .hashes(vec![format!(" {hash} "), hash.to_string()])
            .build()
            .expect("failed to build args");
        assert_eq!(lookup.resolve_hashes().expect("valid"), vec![hash]);

        let bad = LookupArgsBuilder::new()
            .hashes(vec![hash.to_string(), "0xnothash".to_string()])
            .build()
            .expect("failed to build args");
        assert!(matches!(bad.resolve_hashes(), Err(Error::InvalidArguments(_))));

        let none = LookupArgsBuilder::new().build().expect("failed to build args");
        assert!(none.resolve_hashes().is_err());
    }
}
