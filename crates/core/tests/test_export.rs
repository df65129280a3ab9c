//! Integration tests for export and lookup argument handling. None of these reach the network: every
//! case fails validation before the first request.

mod integration_tests {
    use tronex_core::tronex_transactions::{
        export, lookup, Error, ExportArgsBuilder, LookupArgsBuilder,
    };

    const WALLET: &str = "TRaa8yHXzJ5FoVqJNxzBFtbUNKaVwXx5E1";

    fn args() -> ExportArgsBuilder {
        let mut builder = ExportArgsBuilder::new();
        builder
            .addresses(vec![WALLET.to_string()])
            .date_from("2024-01-01".to_string())
            .date_to("2024-01-02".to_string())
            .api_url("https://apilist.tronscanapi.com/api".to_string())
            .rate_limit_delay(Some(0.0));
        builder
    }

    #[tokio::test]
    async fn test_export_rejects_invalid_address() {
        let args = args()
            .addresses(vec!["TRaa8yHXzJ5FoVqJNxzBFtbUNKaVwXx5E".to_string()])
            .build()
            .expect("failed to build args");

        assert!(matches!(export(args).await, Err(Error::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_export_rejects_reversed_dates() {
        let args = args()
            .date_from("2024-02-01".to_string())
            .build()
            .expect("failed to build args");

        assert!(export(args).await.is_err());
    }

    #[tokio::test]
    async fn test_export_requires_base_url() {
        let args = args().api_url(String::new()).build().expect("failed to build args");

        assert!(matches!(export(args).await, Err(Error::FetchError(_))));
    }

    #[tokio::test]
    async fn test_export_rejects_zero_page_limit() {
        let args = args().page_limit(0).build().expect("failed to build args");

        assert!(matches!(export(args).await, Err(Error::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_export_rejects_negative_delay() {
        let args = args().rate_limit_delay(Some(-1.0)).build().expect("failed to build args");

        assert!(matches!(export(args).await, Err(Error::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_lookup_rejects_malformed_hash() {
        let args = LookupArgsBuilder::new()
            .hashes(vec!["not-a-hash".to_string()])
            .api_url("https://apilist.tronscanapi.com/api".to_string())
            .build()
            .expect("failed to build args");

        assert!(matches!(lookup(args).await, Err(Error::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn test_lookup_requires_base_url() {
        let args = LookupArgsBuilder::new()
            .hashes(vec![
                "1dad52d991ba6963777ae069276e01d67ba6e9786811739cb463b405c51a2213".to_string()
            ])
            .rate_limit_delay(Some(0.0))
            .build()
            .expect("failed to build args");

        assert!(matches!(lookup(args).await, Err(Error::FetchError(_))));
    }
}
