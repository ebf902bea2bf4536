use std::collections::HashMap;

use log::warn;
use rust_decimal::Decimal;

use super::holdings_model::{LotValuation, PortfolioReport, SymbolGroup};
use crate::errors::ValidationError;
use crate::lots::Lot;
use crate::Result;

/// Computes the grouped portfolio valuation for a set of lots.
///
/// `price_of` resolves the current price for an uppercased symbol and must
/// return zero for symbols it does not know. With the zero default, a
/// position without a quote is valued at zero and shows its full cost
/// basis as unrealized loss until real data arrives; valuation never fails
/// because a quote is missing.
///
/// The function is pure: no side effects, and identical inputs always
/// produce a structurally identical report. Groups are keyed by uppercased
/// symbol and emitted in first-seen order; lots keep their input order
/// within a group.
///
/// # Errors
///
/// Returns a [`ValidationError`] only when a lot carries an empty (or
/// whitespace-only) symbol. Everything else, including empty input and
/// zero or negative share counts, is handled without error.
pub fn aggregate<F>(lots: &[Lot], price_of: F) -> Result<PortfolioReport>
where
    F: Fn(&str) -> Decimal,
{
    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<&Lot>> = HashMap::new();

    for lot in lots {
        let symbol = lot.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        grouped
            .entry(symbol.clone())
            .or_insert_with(|| {
                order.push(symbol);
                Vec::new()
            })
            .push(lot);
    }

    let mut report = PortfolioReport::default();

    for symbol in order {
        let group_lots = &grouped[&symbol];
        let total_shares: Decimal = group_lots.iter().map(|l| l.shares).sum();
        let total_cost: Decimal = group_lots.iter().map(|l| l.shares * l.cost_basis).sum();
        let current_price = price_of(&symbol);

        let lot_rows: Vec<LotValuation> = group_lots
            .iter()
            .map(|l| LotValuation {
                lot: (*l).clone(),
                market_value: l.shares * current_price,
                gain: (current_price - l.cost_basis) * l.shares,
            })
            .collect();

        let group = if total_shares.is_zero() {
            // Zero total shares would make the average cost a division by
            // zero; the group is reported as worthless instead of NaN.
            warn!(
                "Symbol group {} has zero total shares; reporting zero value and gain",
                symbol
            );
            SymbolGroup {
                symbol,
                lots: lot_rows,
                total_shares,
                total_cost,
                average_cost: None,
                current_price,
                market_value: Decimal::ZERO,
                gain: Decimal::ZERO,
            }
        } else {
            let average_cost = total_cost / total_shares;
            let market_value = current_price * total_shares;
            // Equal to (current_price - average_cost) * total_shares, but
            // computed without the division so no rounding creeps in.
            let gain = market_value - total_cost;
            SymbolGroup {
                symbol,
                lots: lot_rows,
                total_shares,
                total_cost,
                average_cost: Some(average_cost),
                current_price,
                market_value,
                gain,
            }
        };

        report.total_value += group.market_value;
        report.total_gain += group.gain;
        report.groups.push(group);
    }

    Ok(report)
}
