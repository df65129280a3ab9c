mod integration_tests {
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::{
        collections::{HashMap, VecDeque},
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
        time::Duration,
    };
    use tronex_common::resources::tronscan::{
        RawTransaction, TransactionPage, TransactionQuery,
    };
    use tronex_pricing::{HistoricalPriceSource, PriceLookup};
    use tronex_transactions::{
        error::Error, ExportArgsBuilder, FetchOutcome, TransactionClient, TransactionSource,
    };

    const HASH_FOUND: &str = "1dad52d991ba6963777ae069276e01d67ba6e9786811739cb463b405c51a2213";
    const HASH_UNKNOWN: &str = "2dad52d991ba6963777ae069276e01d67ba6e9786811739cb463b405c51a2213";
    const HASH_FAILING: &str = "3dad52d991ba6963777ae069276e01d67ba6e9786811739cb463b405c51a2213";

    const WALLET_A: &str = "TRaa8yHXzJ5FoVqJNxzBFtbUNKaVwXx5E1";
    const WALLET_B: &str = "TEkxiTehnzSmSe2XqrBj4w32RUN966rdz8";
    const WALLET_C: &str = "TAFjULxiVgT4qWk6UZwjqwZXTSaGaqnVp4";

    #[derive(Debug)]
    enum Reply {
        Page(Vec<RawTransaction>),
        NoData,
        Fail,
    }

    #[derive(Debug, Default)]
    struct ScriptedSource {
        replies: Mutex<HashMap<String, VecDeque<Reply>>>,
        queries: Arc<Mutex<Vec<(String, i64, i64, usize, usize)>>>,
        infos: HashMap<String, RawTransaction>,
        endless: bool,
    }

    impl ScriptedSource {
        fn with(mut self, address: &str, replies: Vec<Reply>) -> Self {
            self.replies.get_mut().expect("lock").insert(address.to_string(), replies.into());
            self
        }

        fn with_info(mut self, raw: RawTransaction) -> Self {
            self.infos.insert(raw.hash.clone().expect("hash"), raw);
            self
        }
    }

    #[async_trait]
    impl TransactionSource for ScriptedSource {
        async fn transaction_page(
            &self,
            query: &TransactionQuery<'_>,
        ) -> Result<TransactionPage, Error> {
            self.queries.lock().expect("lock").push((
                query.address.to_string(),
                query.start_timestamp,
                query.end_timestamp,
                query.start,
                query.limit,
            ));

            if self.endless {
                return Ok(TransactionPage { data: Some(txs(query.address, query.limit)), total: None });
            }

            let reply = self
                .replies
                .lock()
                .expect("lock")
                .get_mut(query.address)
                .and_then(VecDeque::pop_front)
                .unwrap_or(Reply::Page(Vec::new()));

            match reply {
                Reply::Page(data) => Ok(TransactionPage { data: Some(data), total: None }),
                Reply::NoData => Ok(TransactionPage { data: None, total: None }),
                Reply::Fail => Err(Error::InvalidArguments("503 Service Unavailable".to_string())),
            }
        }

        async fn transaction_info(&self, hash: &str) -> Result<Option<RawTransaction>, Error> {
            if hash == HASH_FAILING {
                return Err(Error::InvalidArguments("503 Service Unavailable".to_string()));
            }
            Ok(self.infos.get(hash).cloned())
        }
    }

    #[derive(Debug, Clone, Default)]
    struct CountingPrices {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl HistoricalPriceSource for CountingPrices {
        async fn usd_price(
            &self,
            _coin_id: &str,
            _day: NaiveDate,
        ) -> Result<Option<f64>, tronex_pricing::error::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(0.1))
        }
    }

    fn tx(hash: &str, amount: &str, timestamp: i64) -> RawTransaction {
        RawTransaction {
            hash: Some(hash.to_string()),
            timestamp: Some(timestamp),
            amount: Some(amount.to_string()),
            confirmed: Some(true),
            contract_type: Some(1),
            ..Default::default()
        }
    }

    fn txs(prefix: &str, count: usize) -> Vec<RawTransaction> {
        (0..count).map(|i| tx(&format!("{prefix}-{i}"), "1000000", 1704067200000)).collect()
    }

    #[tokio::test]
    async fn test_short_page_stops_pagination() {
        let source = ScriptedSource::default()
            .with(WALLET_A, vec![Reply::Page(txs("p1", 3)), Reply::Page(txs("p2", 2))]);
        let queries = source.queries.clone();
        let mut client = TransactionClient::new(source).with_page_limit(3);

        let result = client.fetch(WALLET_A, 0, 1).await;

        assert_eq!(result.outcome, FetchOutcome::LastPage);
        assert_eq!(result.records.len(), 5);
        assert_eq!(result.pages, 2);

        let queries = queries.lock().expect("lock");
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].3, 0);
        assert_eq!(queries[1].3, 3);
        assert!(queries.iter().all(|q| q.4 == 3));
    }

    #[tokio::test]
    async fn test_empty_page_or_missing_data_stops_pagination() {
        let source = ScriptedSource::default()
            .with(WALLET_A, vec![Reply::Page(txs("p1", 2)), Reply::Page(Vec::new())])
            .with(WALLET_B, vec![Reply::NoData, Reply::Page(txs("never", 2))]);
        let mut client = TransactionClient::new(source).with_page_limit(2);

        let a = client.fetch(WALLET_A, 0, 1).await;
        assert_eq!(a.outcome, FetchOutcome::Exhausted);
        assert_eq!(a.records.len(), 2);

        let b = client.fetch(WALLET_B, 0, 1).await;
        assert_eq!(b.outcome, FetchOutcome::Exhausted);
        assert!(b.records.is_empty());
        assert_eq!(b.pages, 1);
    }

    #[tokio::test]
    async fn test_record_ceiling_truncates() {
        let source = ScriptedSource { endless: true, ..Default::default() };
        let mut client = TransactionClient::new(source).with_page_limit(2).with_max_records(3);

        let result = client.fetch(WALLET_A, 0, 1).await;

        assert_eq!(result.outcome, FetchOutcome::Ceiling);
        assert!(!result.outcome.is_complete());
        assert_eq!(result.records.len(), 4);
        assert_eq!(result.pages, 2);
    }

    #[tokio::test]
    async fn test_failure_keeps_earlier_pages() {
        let source = ScriptedSource::default()
            .with(WALLET_A, vec![Reply::Page(txs("p1", 2)), Reply::Fail]);
        let mut client = TransactionClient::new(source).with_page_limit(2);

        let result = client.fetch(WALLET_A, 0, 1).await;

        assert!(matches!(result.outcome, FetchOutcome::Failed(_)));
        assert_eq!(result.records.len(), 2);
    }

    #[tokio::test]
    async fn test_failing_address_does_not_stop_batch() {
        let source = ScriptedSource::default()
            .with(WALLET_A, vec![Reply::Page(txs("a", 1))])
            .with(WALLET_B, vec![Reply::Fail])
            .with(WALLET_C, vec![Reply::Page(txs("c", 1))]);
        let mut client = TransactionClient::new(source);
        let addresses = [WALLET_A, WALLET_B, WALLET_C].map(String::from);

        let result = client.fetch_many(&addresses, 0, 1).await;

        let hashes: Vec<&str> = result.records.iter().map(|r| r.hash.as_str()).collect();
        assert_eq!(hashes, vec!["a-0", "c-0"]);
        assert_eq!(result.outcomes.len(), 3);
        assert_eq!(result.outcomes[1].address, WALLET_B);
        assert_eq!(result.outcomes[1].records, 0);
        assert_eq!(result.failed().count(), 1);
        assert!(result.outcomes[0].outcome.is_complete());
    }

    #[tokio::test]
    async fn test_date_range_end_to_end() {
        let args = ExportArgsBuilder::new()
            .addresses(vec![WALLET_A.to_string(), WALLET_B.to_string()])
            .date_from("2024-01-01".to_string())
            .date_to("2024-01-02".to_string())
            .build()
            .expect("failed to build args");
        let addresses = args.resolve_addresses().expect("valid addresses");
        let (start_ms, end_ms) = args.window().expect("valid window");

        let source = ScriptedSource::default()
            .with(WALLET_A, vec![Reply::Page(txs("a", 2))])
            .with(WALLET_B, vec![Reply::Page(txs("b", 1))]);
        let queries = source.queries.clone();
        let mut client = TransactionClient::new(source);

        let result = client.fetch_many(&addresses, start_ms, end_ms).await;

        assert_eq!((result.start_timestamp, result.end_timestamp), (1704067200000, 1704240000000));
        assert!(queries
            .lock()
            .expect("lock")
            .iter()
            .all(|q| q.1 == 1704067200000 && q.2 == 1704240000000));

        assert_eq!(result.records.len(), 3);
        assert!(result.records.iter().any(|r| r.wallet == WALLET_A));
        assert!(result.records.iter().any(|r| r.wallet == WALLET_B));
        for record in &result.records {
            assert!(record.hash.starts_with(if record.wallet == WALLET_A { "a-" } else { "b-" }));
        }
    }

    #[tokio::test]
    async fn test_enrichment_prices_each_record() {
        let prices = CountingPrices::default();
        let calls = prices.calls.clone();
        let lookup = PriceLookup::new(prices).with_request_delay(Duration::ZERO).boxed();

        let source = ScriptedSource::default().with(
            WALLET_A,
            vec![Reply::Page(vec![
                tx("t1", "2500000", 1704067200000),
                tx("t2", "5000000", 1704070800000),
            ])],
        );
        let mut client = TransactionClient::new(source).with_prices(lookup);

        let result = client.fetch(WALLET_A, 0, 1).await;

        let values: Vec<_> = result.records.iter().map(|r| r.usd_value.as_deref()).collect();
        assert_eq!(values, vec![Some("0.25"), Some("0.50")]);
        assert_eq!(result.records[0].unit_price.as_deref(), Some("0.10000000"));
        // both records fall on the same day
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.prices().map(|p| p.cache_len()), Some(1));
    }

    fn page_from_json(body: &str) -> Vec<RawTransaction> {
        let page: TransactionPage = serde_json::from_str(body).expect("failed to parse page");
        page.data.expect("data")
    }

    fn usdt_transfer_tx() -> RawTransaction {
        page_from_json(&format!(
            r#"{{ "data": [{{
                "hash": "{HASH_FOUND}",
                "timestamp": 1704067200000,
                "ownerAddress": "{WALLET_A}",
                "amount": 0,
                "confirmed": true,
                "contractType": 31,
                "trc20TransferInfo": [
                    {{ "symbol": "USDT", "contract_address": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t",
                       "amount_str": "20000000000", "decimals": 6,
                       "from_address": "{WALLET_A}", "to_address": "{WALLET_B}" }},
                    {{ "symbol": "BTT", "contract_address": "{WALLET_C}",
                       "amount_str": "25000000000000000000", "decimals": 18 }}
                ]
            }}] }}"#
        ))
        .remove(0)
    }

    #[tokio::test]
    async fn test_numeric_json_amounts_are_scaled_exactly() {
        let data = page_from_json(
            r#"{ "data": [
                { "hash": "n1", "amount": 2500000, "value": 9 },
                { "hash": "n2", "value": 1500000 },
                { "hash": "n3", "contractData": { "amount": 7000000 } },
                { "hash": "n4", "amount": 25000000000000000000,
                  "contractAddress": "TAFjULxiVgT4qWk6UZwjqwZXTSaGaqnVp4" }
            ] }"#,
        );
        let source = ScriptedSource::default().with(WALLET_A, vec![Reply::Page(data)]);
        let mut client = TransactionClient::new(source);

        let result = client.fetch(WALLET_A, 0, 1).await;

        let amounts: Vec<(&str, &str, &str)> = result
            .records
            .iter()
            .map(|r| (r.value.as_str(), r.amount.as_str(), r.token_symbol.as_str()))
            .collect();
        assert_eq!(
            amounts,
            vec![
                ("2500000", "2.5", "TRX"),
                ("1500000", "1.5", "TRX"),
                ("7000000", "7", "TRX"),
                ("25000000000000000000", "25", "BTT"),
            ]
        );
    }

    #[tokio::test]
    async fn test_trc20_transfers_expand_and_filter_by_token() {
        let source = ScriptedSource::default()
            .with(WALLET_A, vec![Reply::Page(vec![usdt_transfer_tx(), tx("plain", "1000000", 0)])]);
        let mut client = TransactionClient::new(source);

        let all = client.fetch(WALLET_A, 0, 1).await;
        let symbols: Vec<&str> = all.records.iter().map(|r| r.token_symbol.as_str()).collect();
        assert_eq!(symbols, vec!["USDT", "BTT", "TRX"]);
        assert_eq!(all.records[0].amount, "20000");
        assert_eq!(all.records[1].amount, "25");

        let source = ScriptedSource::default()
            .with(WALLET_A, vec![Reply::Page(vec![usdt_transfer_tx(), tx("plain", "1000000", 0)])]);
        let mut client = TransactionClient::new(source).with_token_filter("usdt");

        let usdt = client.fetch(WALLET_A, 0, 1).await;
        assert_eq!(usdt.records.len(), 1);
        assert_eq!(usdt.records[0].token_symbol, "USDT");
        assert_eq!(usdt.records[0].to_address, WALLET_B);
    }

    #[tokio::test]
    async fn test_ceiling_counts_fetched_transactions_not_kept_records() {
        let source = ScriptedSource { endless: true, ..Default::default() };
        let mut client = TransactionClient::new(source)
            .with_page_limit(2)
            .with_max_records(3)
            .with_token_filter("USDT");

        let result = client.fetch(WALLET_A, 0, 1).await;

        assert_eq!(result.outcome, FetchOutcome::Ceiling);
        assert!(result.records.is_empty());
        assert_eq!(result.pages, 2);
    }

    #[tokio::test]
    async fn test_lookup_by_hash() {
        let source = ScriptedSource::default().with_info(usdt_transfer_tx());
        let mut client = TransactionClient::new(source).with_token_filter("USDT");
        let hashes = [HASH_FOUND, HASH_UNKNOWN, HASH_FAILING].map(String::from);

        let result = client.lookup(&hashes).await;

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].hash, HASH_FOUND);
        assert_eq!(result.records[0].wallet, WALLET_A);
        assert_eq!(result.records[0].amount, "20000");
        assert_eq!(result.missing, vec![HASH_UNKNOWN, HASH_FAILING]);
    }
}
