//! Quote domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest known market data for a symbol.
///
/// Fetch responses are sparse: any field a provider does not return stays
/// `None`, and the cache keeps its previous value for that field on update.
///
/// # Fields
///
/// * `symbol` - Ticker symbol, uppercased when cached
/// * `name` - Display name, when the provider supplies one
/// * `price` - Last traded price, non-negative
/// * `change_percent` - Daily percent change; sign-carrying, so `None` is
///   rendered as "—" rather than zero
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<Decimal>,
}

impl Quote {
    /// Creates a quote with only the symbol set.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }
}
