//! Fintrack Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Fintrack: portfolio
//! lots, quote caching, portfolio valuation, the transaction ledger, and
//! the symbol watchlist. It is storage-agnostic and defines repository
//! traits that are implemented by the surrounding application.

pub mod errors;
pub mod lots;
pub mod portfolio;
pub mod quotes;
pub mod transactions;
pub mod watchlist;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
