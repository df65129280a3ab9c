use fancy_regex::Regex;
use lazy_static::lazy_static;

/// Symbol of the chain's native asset
pub const NATIVE_SYMBOL: &str = "TRX";
/// Decimal scale of the native asset (1 TRX = 1,000,000 sun)
pub const NATIVE_DECIMALS: u32 = 6;

/// Hard cap on the number of records fetched for a single address
pub const MAX_RECORDS_PER_ADDRESS: usize = 10_000;
/// Default number of records requested per explorer page
pub const DEFAULT_PAGE_LIMIT: usize = 200;
/// Sort key passed to the explorer, newest first
pub const TRANSACTION_SORT: &str = "-timestamp";

/// Default base URL of the CoinGecko v3 API
pub const DEFAULT_COINGECKO_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";
/// Timeout applied to historical price requests, in seconds
pub const PRICE_REQUEST_TIMEOUT_SECS: u64 = 15;
/// Timeout applied to explorer requests, in seconds
pub const EXPLORER_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Delay applied before each historical price request, in milliseconds
pub const PRICE_REQUEST_DELAY_MS: u64 = 1_000;
/// Default delay applied before each explorer request, in seconds
pub const DEFAULT_API_RATE_LIMIT_DELAY: f64 = 1.0;

/// Symbol to CoinGecko coin id
pub const COINGECKO_IDS: [(&str, &str); 12] = [
    ("TRX", "tron"),
    ("USDT", "tether"),
    ("USDC", "usd-coin"),
    ("BTT", "bittorrent"),
    ("JST", "just"),
    ("SUN", "sun-token"),
    ("WIN", "wink"),
    ("JUST", "just"),
    ("NFT", "apenft"),
    ("USDJ", "just-stablecoin"),
    ("TUSD", "true-usd"),
    ("LIVE", "live-coin"),
];

/// Symbol to decimal scale used when converting raw amounts
pub const TOKEN_DECIMALS: [(&str, u32); 12] = [
    ("TRX", 6),
    ("USDT", 6),
    ("USDC", 6),
    ("BTT", 18),
    ("JST", 18),
    ("SUN", 18),
    ("WIN", 6),
    ("JUST", 18),
    ("NFT", 6),
    ("USDJ", 18),
    ("TUSD", 18),
    ("LIVE", 6),
];

/// TRC-20 contract address to symbol, for transfers that only carry the contract
pub const TOKEN_CONTRACTS: [(&str, &str); 9] = [
    ("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", "USDT"),
    ("TEkxiTehnzSmSe2XqrBj4w32RUN966rdz8", "USDC"),
    ("TAFjULxiVgT4qWk6UZwjqwZXTSaGaqnVp4", "BTT"),
    ("TCFLL5dx5ZJdKnWuesXxi1VPwjLVmWZZy9", "JST"),
    ("TSSMHYeV2uE9qYH95DqyoCuNCzEL1NvU3S", "SUN"),
    ("TLa2f6VPqDgRE67v1736s7bJ8Ray5wYjU7", "WIN"),
    ("TFczxzPhnThNSqr5by8tvxsdCFRRz6cPNq", "NFT"),
    ("TMwFHYXLJaRUPeW6421aqXL4ZEzPRFGkGT", "USDJ"),
    ("TUpMhErZL2fhh4sVNULAbNKLokS4GjC1F4", "TUSD"),
];

/// Static USD prices used when a live lookup is unavailable
pub const FALLBACK_PRICES: [(&str, f64); 12] = [
    ("TRX", 0.12),
    ("USDT", 1.0),
    ("USDC", 1.0),
    ("BTT", 0.0000008),
    ("JST", 0.025),
    ("SUN", 0.006),
    ("WIN", 0.00008),
    ("JUST", 0.025),
    ("NFT", 0.0000005),
    ("USDJ", 1.0),
    ("TUSD", 1.0),
    ("LIVE", 0.001),
];

/// Explorer `contractType` code to contract label
pub const CONTRACT_TYPES: [(i64, &str); 5] = [
    (1, "TransferContract"),
    (2, "TransferAssetContract"),
    (11, "FreezeBalanceContract"),
    (12, "UnfreezeBalanceContract"),
    (31, "TriggerSmartContract"),
];

lazy_static! {
    /// Base58 TRON address: a leading `T` followed by 33 base58 characters
    pub static ref ADDRESS_REGEX: Regex =
        Regex::new(r"^T[1-9A-HJ-NP-Za-km-z]{33}$").expect("failed to compile regex");

    /// Transaction hash: 64 hex characters
    pub static ref HASH_REGEX: Regex =
        Regex::new(r"^[0-9a-fA-F]{64}$").expect("failed to compile regex");

    /// Calendar date in `YYYY-MM-DD` form
    pub static ref DATE_REGEX: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("failed to compile regex");
}
