//! Quote management module.
//!
//! - [`model`] - The quote domain model
//! - [`cache`] - In-memory cache of the latest quote per symbol
//! - [`provider`] - Contract for the market data collaborator
//! - [`service`] - Refresh orchestration on top of cache + provider
//!
//! The cache is the only shared mutable state in the core. Quote fetching
//! is best-effort: a provider failure leaves the cache untouched and the
//! rest of the system keeps working with stale or zero prices.

pub mod cache;
pub mod model;
pub mod provider;
pub mod service;


pub use cache::QuoteCache;
pub use model::Quote;
pub use provider::QuoteProviderTrait;
pub use service::{QuoteService, QuoteServiceTrait};
