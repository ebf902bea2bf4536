use std::sync::Arc;

use log::debug;

use super::holdings_model::PortfolioReport;
use super::holdings_valuation::aggregate;
use crate::lots::LotServiceTrait;
use crate::quotes::QuoteCache;
use crate::Result;

/// Trait defining the contract for holdings report operations.
pub trait HoldingsServiceTrait: Send + Sync {
    fn portfolio_report(&self) -> Result<PortfolioReport>;
}

/// Builds portfolio valuation reports from the lot store and the quote
/// cache.
///
/// The report is recomputed from scratch on every call; there is no
/// incremental state to invalidate, so the service can be called freely
/// after any lot or quote change.
pub struct HoldingsService {
    lot_service: Arc<dyn LotServiceTrait>,
    quote_cache: Arc<QuoteCache>,
}

impl HoldingsService {
    pub fn new(lot_service: Arc<dyn LotServiceTrait>, quote_cache: Arc<QuoteCache>) -> Self {
        Self {
            lot_service,
            quote_cache,
        }
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn portfolio_report(&self) -> Result<PortfolioReport> {
        let lots = self.lot_service.get_lots()?;
        debug!("Building portfolio report for {} lots", lots.len());
        aggregate(&lots, |symbol| self.quote_cache.price_of(symbol))
    }
}
