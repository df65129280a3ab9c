use rust_decimal::{prelude::FromPrimitive, Decimal};
use serde::Serialize;
use tracing::warn;
use tronex_common::utils::{
    decimal::{format_usd, scale_decimal},
    strings::format_unit_price,
};

/// The USD value of a transfer, formatted for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsdValuation {
    /// Scaled amount times unit price, two fractional digits
    pub usd_value: String,
    /// Unit price, eight fractional digits
    pub unit_price: String,
}

impl UsdValuation {
    /// Values `raw_amount` (in the token's smallest unit) at `unit_price` USD per whole token.
    ///
    /// ```
    /// use tronex_pricing::UsdValuation;
    ///
    /// let valuation = UsdValuation::new("20000000000", 6, 1.0);
    /// assert_eq!(valuation.usd_value, "20000.00");
    /// assert_eq!(valuation.unit_price, "1.00000000");
    /// ```
    pub fn new(raw_amount: &str, decimals: u32, unit_price: f64) -> Self {
        let amount = scale_decimal(raw_amount, decimals).unwrap_or_default();
        let price = Decimal::from_f64(unit_price).unwrap_or_default();
        let value = amount.checked_mul(price).unwrap_or_else(|| {
            warn!("USD value of {} at ${} overflows, recording 0", amount, unit_price);
            Decimal::ZERO
        });

        Self { usd_value: format_usd(value), unit_price: format_unit_price(unit_price) }
    }
}
