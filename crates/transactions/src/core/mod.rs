pub(crate) mod client;
pub(crate) mod csv;
pub(crate) mod normalize;
pub(crate) mod source;

use std::time::{Duration, Instant};
use tracing::{debug, info};
use tronex_common::{
    constants::DEFAULT_API_RATE_LIMIT_DELAY, resources::tronscan::TronScanClient,
};
use tronex_pricing::{coingecko_lookup, DynPriceLookup};

use crate::{
    core::client::TransactionClient,
    error::Error,
    interfaces::{ExportArgs, ExportResult, LookupArgs, LookupResult},
};

/// Exports the transaction history of every address in `args` over its date range.
///
/// The TronScan base URL must be set in `args`; the CLI fills it (and the other connection
/// settings) from the configuration when not given on the command line. Individual address
/// failures are reported in [`ExportResult::outcomes`] rather than returned as errors.
pub async fn export(args: ExportArgs) -> Result<ExportResult, Error> {
    let start_time = Instant::now();

    let addresses = args.resolve_addresses()?;
    let (start_ms, end_ms) = args.window()?;
    if args.page_limit == 0 {
        return Err(Error::InvalidArguments("page limit must be at least 1".to_string()));
    }

    let source = tronscan_client(&args.api_url, &args.api_key, args.rate_limit_delay)?;
    let mut client =
        TransactionClient::new(source).with_page_limit(args.page_limit).with_progress(true);
    if let Some(token) = &args.token {
        client = client.with_token_filter(token);
    }
    if args.enrich {
        client = client.with_prices(price_lookup(&args.coingecko_url)?);
    }

    info!(
        "exporting {} address(es) from {} to {}",
        addresses.len(),
        args.date_from.trim(),
        args.date_to.trim()
    );
    let result = client.fetch_many(&addresses, start_ms, end_ms).await;

    debug!("export took {:?}", start_time.elapsed());
    Ok(result)
}

/// Looks up every transaction hash in `args`. Unknown hashes are reported in
/// [`LookupResult::missing`] rather than returned as errors.
pub async fn lookup(args: LookupArgs) -> Result<LookupResult, Error> {
    let hashes = args.resolve_hashes()?;

    let source = tronscan_client(&args.api_url, &args.api_key, args.rate_limit_delay)?;
    let mut client = TransactionClient::new(source);
    if let Some(token) = &args.token {
        client = client.with_token_filter(token);
    }
    if args.enrich {
        client = client.with_prices(price_lookup(&args.coingecko_url)?);
    }

    Ok(client.lookup(&hashes).await)
}

fn tronscan_client(
    api_url: &str,
    api_key: &str,
    rate_limit_delay: Option<f64>,
) -> Result<TronScanClient, Error> {
    let delay = rate_limit_delay.unwrap_or(DEFAULT_API_RATE_LIMIT_DELAY);
    let delay = Duration::try_from_secs_f64(delay).map_err(|_| {
        Error::InvalidArguments(format!("invalid rate limit delay: {delay}"))
    })?;

    let api_key = Some(api_key).filter(|key| !key.is_empty());
    let source = TronScanClient::new(api_url, api_key, delay)?;
    debug!("using TronScan API at {}", source.base_url());
    Ok(source)
}

fn price_lookup(coingecko_url: &str) -> Result<DynPriceLookup, Error> {
    let prices = coingecko_lookup(coingecko_url)
        .map_err(|e| Error::InvalidArguments(format!("failed to set up price lookup: {e}")))?;
    Ok(prices.boxed())
}
