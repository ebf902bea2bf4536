use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lots::Lot;

/// Per-lot valuation row displayed under a symbol group.
///
/// Lot gain uses the lot's own cost basis, not the group average; both
/// figures are reported side by side in the UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LotValuation {
    #[serde(flatten)]
    pub lot: Lot,
    pub market_value: Decimal,
    pub gain: Decimal,
}

/// All lots of one symbol aggregated into a single valuation row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolGroup {
    pub symbol: String,
    /// The group's lots in their original input order.
    pub lots: Vec<LotValuation>,
    pub total_shares: Decimal,
    pub total_cost: Decimal,
    /// Cost-weighted average basis across the group's lots. `None` when
    /// the group holds zero total shares, which would leave the average
    /// undefined.
    pub average_cost: Option<Decimal>,
    pub current_price: Decimal,
    pub market_value: Decimal,
    pub gain: Decimal,
}

/// Valuation of the whole portfolio, recomputed fresh on every pass and
/// never persisted.
///
/// Groups appear in the order their symbols first occur in the input lot
/// sequence; the order is stable, not sorted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub groups: Vec<SymbolGroup>,
    pub total_value: Decimal,
    pub total_gain: Decimal,
}

impl PortfolioReport {
    /// Looks up a group by symbol, case-insensitively.
    pub fn group(&self, symbol: &str) -> Option<&SymbolGroup> {
        let key = symbol.to_uppercase();
        self.groups.iter().find(|g| g.symbol == key)
    }
}
