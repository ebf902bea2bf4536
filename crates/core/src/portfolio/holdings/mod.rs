//! Portfolio holdings valuation.
//!
//! The aggregation engine ([`holdings_valuation::aggregate`]) is a pure
//! transform from lots plus a price lookup to a grouped report; the
//! service wires it to the lot store and quote cache.

pub mod holdings_model;
pub mod holdings_service;
pub mod holdings_valuation;


pub use holdings_model::{LotValuation, PortfolioReport, SymbolGroup};
pub use holdings_service::{HoldingsService, HoldingsServiceTrait};
pub use holdings_valuation::aggregate;
