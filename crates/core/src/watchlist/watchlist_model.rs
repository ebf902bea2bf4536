use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tracked symbol with no position attached.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: String,
    pub symbol: String,
}

/// A watchlist entry joined with its cached quote for display.
///
/// Optional fields stay `None` while no quote is cached and are rendered
/// as "—" upstream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistRow {
    pub id: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<Decimal>,
}
