use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchase record of a symbol: shares bought at a cost basis on a date.
///
/// Lots are immutable once created; the only supported mutation is
/// deletion. The symbol is stored uppercased.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: String,
    pub symbol: String,
    pub shares: Decimal,
    pub cost_basis: Decimal,
    pub purchase_date: NaiveDate,
}

/// Input payload for creating a new lot.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewLot {
    pub symbol: String,
    pub shares: Decimal,
    pub cost_basis: Decimal,
    pub purchase_date: NaiveDate,
}
