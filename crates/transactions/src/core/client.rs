use indicatif::ProgressBar;
use rust_decimal::Decimal;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use tronex_common::{
    constants::{DEFAULT_PAGE_LIMIT, MAX_RECORDS_PER_ADDRESS},
    info_spinner,
    resources::tronscan::{RawTransaction, TransactionQuery},
    utils::integers::ToLocaleString,
};
use tronex_pricing::DynPriceLookup;

use crate::{
    core::{normalize::normalize_transfers, source::TransactionSource},
    interfaces::{
        AddressOutcome, AddressResult, ExportResult, FetchOutcome, LookupResult, TransactionRecord,
    },
};

/// Pages through an address's transaction history and normalizes every record.
///
/// All requests are issued one at a time. A transaction that emitted TRC-20 transfers becomes
/// one record per transfer. When a [`DynPriceLookup`] is attached, each record is valued in USD
/// as it is normalized.
#[derive(Debug)]
pub struct TransactionClient<T> {
    source: T,
    prices: Option<DynPriceLookup>,
    token: Option<String>,
    page_limit: usize,
    max_records: usize,
    show_progress: bool,
}

impl<T: TransactionSource> TransactionClient<T> {
    /// A client over `source` requesting pages of 200 records, without USD enrichment.
    pub fn new(source: T) -> Self {
        Self {
            source,
            prices: None,
            token: None,
            page_limit: DEFAULT_PAGE_LIMIT,
            max_records: MAX_RECORDS_PER_ADDRESS,
            show_progress: false,
        }
    }

    /// Values every record in USD using `prices`.
    pub fn with_prices(mut self, prices: DynPriceLookup) -> Self {
        self.prices = Some(prices);
        self
    }

    /// Keeps only records whose token symbol matches `symbol`, ignoring case.
    pub fn with_token_filter(mut self, symbol: &str) -> Self {
        self.token = Some(symbol.trim().to_uppercase()).filter(|symbol| !symbol.is_empty());
        self
    }

    /// Sets the page size. Zero is treated as one.
    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    /// Sets how many explorer transactions one address may fetch before pagination stops.
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    /// Shows a spinner while pages are fetched.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The attached price lookup, if any.
    pub fn prices(&self) -> Option<&DynPriceLookup> {
        self.prices.as_ref()
    }

    /// Fetches every transaction of `address` in `[start_ms, end_ms)`, newest first.
    ///
    /// Pagination stops on an empty page, a short page, a failed request, or once more than the
    /// transaction ceiling has been fetched. Records gathered before a failure are kept.
    pub async fn fetch(&mut self, address: &str, start_ms: i64, end_ms: i64) -> AddressResult {
        let start_time = Instant::now();
        let progress = self.spinner(address);

        let mut records = Vec::new();
        let mut fetched = 0;
        let mut pages = 0;
        let mut offset = 0;

        let outcome = loop {
            let query = TransactionQuery {
                address,
                start_timestamp: start_ms,
                end_timestamp: end_ms,
                start: offset,
                limit: self.page_limit,
            };

            pages += 1;
            let page = match self.source.transaction_page(&query).await {
                Ok(page) => page,
                Err(e) => {
                    error!("error fetching transactions for {} at offset {}: {}", address, offset, e);
                    break FetchOutcome::Failed(e.to_string());
                }
            };

            let data = match page.data {
                Some(data) if !data.is_empty() => data,
                _ => break FetchOutcome::Exhausted,
            };
            let page_len = data.len();
            fetched += page_len;

            for raw in data {
                records.extend(self.process(raw, address).await);
            }

            debug!(
                "processed {} transactions for {}, {} records so far",
                page_len,
                address,
                records.len()
            );
            if let Some(progress) = &progress {
                progress.set_message(format!(
                    "fetched {} transactions for '{address}' .",
                    records.len().to_locale_string()
                ));
            }

            if page_len < self.page_limit {
                break FetchOutcome::LastPage;
            }
            if fetched > self.max_records {
                warn!(
                    "reached the {} transaction limit for {}, later transactions were not fetched",
                    self.max_records.to_locale_string(),
                    address
                );
                break FetchOutcome::Ceiling;
            }

            offset += self.page_limit;
        };

        if let Some(progress) = progress {
            progress.finish_and_clear();
        }
        debug!("fetching transactions for {} took {:?}", address, start_time.elapsed());

        AddressResult { records, outcome, pages }
    }

    /// Fetches every address over the same window, in order. A failing address is logged and
    /// contributes whatever it fetched before failing; it never stops the batch.
    pub async fn fetch_many(
        &mut self,
        addresses: &[String],
        start_ms: i64,
        end_ms: i64,
    ) -> ExportResult {
        let mut result =
            ExportResult { start_timestamp: start_ms, end_timestamp: end_ms, ..Default::default() };

        for (i, address) in addresses.iter().enumerate() {
            info!("processing address {}/{}: {}", i + 1, addresses.len(), address);

            let fetched = self.fetch(address, start_ms, end_ms).await;
            match &fetched.outcome {
                FetchOutcome::Failed(e) => {
                    error!("failed to get transactions for address {}: {}", address, e)
                }
                outcome => info!(
                    "address {}: {} transactions ({})",
                    address,
                    fetched.records.len().to_locale_string(),
                    outcome
                ),
            }

            result.outcomes.push(AddressOutcome {
                address: address.clone(),
                records: fetched.records.len(),
                outcome: fetched.outcome,
            });
            result.records.extend(fetched.records);
        }

        info!("total transactions found: {}", result.records.len().to_locale_string());
        if self.prices.is_some() {
            let total_usd: Decimal = result
                .records
                .iter()
                .filter_map(|r| r.usd_value.as_deref())
                .filter_map(|v| v.parse::<Decimal>().ok())
                .sum();
            info!("total USD value: ${}", total_usd.to_locale_string());
        }
        result
    }

    /// Looks up each transaction hash, in order. Unknown hashes and failed requests are logged
    /// and listed in [`LookupResult::missing`]. Records are tagged with the sender address.
    pub async fn lookup(&mut self, hashes: &[String]) -> LookupResult {
        let start_time = Instant::now();
        let mut result = LookupResult::default();

        for hash in hashes {
            match self.source.transaction_info(hash).await {
                Ok(Some(raw)) => {
                    let wallet = raw.owner_address.clone().unwrap_or_default();
                    let records = self.process(raw, &wallet).await;
                    debug!("transaction {}: {} record(s)", hash, records.len());
                    result.records.extend(records);
                }
                Ok(None) => {
                    warn!("transaction {} not found", hash);
                    result.missing.push(hash.clone());
                }
                Err(e) => {
                    error!("failed to look up transaction {}: {}", hash, e);
                    result.missing.push(hash.clone());
                }
            }
        }

        debug!("looking up {} transaction(s) took {:?}", hashes.len(), start_time.elapsed());
        result
    }

    /// Normalizes one explorer transaction, applies the token filter, and prices what is left.
    async fn process(&mut self, raw: RawTransaction, wallet: &str) -> Vec<TransactionRecord> {
        let mut records = normalize_transfers(raw, wallet);
        if let Some(token) = &self.token {
            records.retain(|record| record.token_symbol.eq_ignore_ascii_case(token));
        }

        let Some(prices) = self.prices.as_mut() else {
            return records;
        };

        let mut priced = Vec::with_capacity(records.len());
        for record in records {
            let unit_price = prices.historical_price(&record.token_symbol, record.timestamp).await;
            priced.push(record.with_unit_price(unit_price));
        }
        priced
    }

    fn spinner(&self, address: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let progress = ProgressBar::new_spinner();
        progress.enable_steady_tick(Duration::from_millis(100));
        progress.set_style(info_spinner!());
        progress.set_message(format!("fetching transactions for '{address}' ."));
        Some(progress)
    }
}
