use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use super::watchlist_model::{WatchlistItem, WatchlistRow};
use super::watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::errors::ValidationError;
use crate::quotes::QuoteCache;
use crate::Result;

/// Service for the symbol watchlist.
pub struct WatchlistService {
    watchlist_repository: Arc<dyn WatchlistRepositoryTrait>,
    quote_cache: Arc<QuoteCache>,
}

impl WatchlistService {
    pub fn new(
        watchlist_repository: Arc<dyn WatchlistRepositoryTrait>,
        quote_cache: Arc<QuoteCache>,
    ) -> Self {
        Self {
            watchlist_repository,
            quote_cache,
        }
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    fn get_items(&self) -> Result<Vec<WatchlistItem>> {
        self.watchlist_repository.get_items()
    }

    /// Adds a symbol to the watchlist, uppercased.
    ///
    /// Adding a symbol that is already tracked returns the existing item
    /// unchanged instead of creating a duplicate.
    async fn add_symbol(&self, symbol: &str) -> Result<WatchlistItem> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if let Some(existing) = self
            .watchlist_repository
            .get_items()?
            .into_iter()
            .find(|item| item.symbol == symbol)
        {
            return Ok(existing);
        }
        let item = WatchlistItem {
            id: Uuid::new_v4().to_string(),
            symbol,
        };
        debug!("Adding watchlist item {} ({})", item.id, item.symbol);
        self.watchlist_repository.create_item(item).await
    }

    async fn remove_item(&self, item_id: &str) -> Result<()> {
        debug!("Removing watchlist item {}", item_id);
        self.watchlist_repository.delete_item(item_id).await
    }

    /// Joins the watchlist with the quote cache for display.
    fn watchlist_view(&self) -> Result<Vec<WatchlistRow>> {
        let rows = self
            .watchlist_repository
            .get_items()?
            .into_iter()
            .map(|item| {
                let quote = self.quote_cache.get(&item.symbol);
                WatchlistRow {
                    id: item.id,
                    symbol: item.symbol,
                    name: quote.as_ref().and_then(|q| q.name.clone()),
                    price: quote.as_ref().and_then(|q| q.price),
                    change_percent: quote.as_ref().and_then(|q| q.change_percent),
                }
            })
            .collect();
        Ok(rows)
    }
}
