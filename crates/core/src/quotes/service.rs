use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::cache::QuoteCache;
use super::provider::QuoteProviderTrait;
use crate::Result;

/// Trait defining the contract for quote service operations.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    async fn refresh(&self, symbols: &[String]) -> Result<()>;
    fn price_of(&self, symbol: &str) -> Decimal;
    fn change_of(&self, symbol: &str) -> Option<Decimal>;
}

/// Keeps the quote cache current by polling the provider.
pub struct QuoteService {
    cache: Arc<QuoteCache>,
    provider: Arc<dyn QuoteProviderTrait>,
}

impl QuoteService {
    pub fn new(cache: Arc<QuoteCache>, provider: Arc<dyn QuoteProviderTrait>) -> Self {
        Self { cache, provider }
    }

    pub fn cache(&self) -> Arc<QuoteCache> {
        self.cache.clone()
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    /// Fetches quotes for the given symbols and merges them into the cache.
    ///
    /// Provider failures are swallowed: the cache keeps its prior values
    /// and valuation stays available with stale or zero prices. Overlapping
    /// refresh cycles are not deduplicated; the last one to write a symbol
    /// wins.
    async fn refresh(&self, symbols: &[String]) -> Result<()> {
        if symbols.is_empty() {
            return Ok(());
        }
        match self.provider.fetch_quotes(symbols).await {
            Ok(quotes) => {
                debug!(
                    "Refreshed {} quotes for {} symbols",
                    quotes.len(),
                    symbols.len()
                );
                self.cache.update(&quotes);
            }
            Err(e) => {
                warn!(
                    "Quote fetch failed for {} symbols: {}. Keeping cached values.",
                    symbols.len(),
                    e
                );
            }
        }
        Ok(())
    }

    fn price_of(&self, symbol: &str) -> Decimal {
        self.cache.price_of(symbol)
    }

    fn change_of(&self, symbol: &str) -> Option<Decimal> {
        self.cache.change_of(symbol)
    }
}
