use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A ledger entry.
///
/// The amount's sign alone classifies an entry for display: negative
/// amounts are outflows. There is no derived computation beyond that.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_outflow(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// Input payload for creating a new ledger entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}
