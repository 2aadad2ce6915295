//! Monetary amounts in minor units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency used when a caller does not name one.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// An amount in the smallest unit of an ISO-4217 currency (pence, cents).
///
/// This is the `{currency, minorUnits}` pair the API uses in request and
/// response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAndAmount {
    pub currency: String,
    pub minor_units: i64,
}

impl CurrencyAndAmount {
    pub fn new(currency: impl Into<String>, minor_units: i64) -> Self {
        Self {
            currency: currency.into(),
            minor_units,
        }
    }

    /// Creates an amount in the default currency.
    pub fn gbp(minor_units: i64) -> Self {
        Self::new(DEFAULT_CURRENCY, minor_units)
    }
}

impl fmt::Display for CurrencyAndAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let abs = self.minor_units.unsigned_abs();
        write!(f, "{}{}.{:02} {}", sign, abs / 100, abs % 100, self.currency)
    }
}
