use async_trait::async_trait;

use super::watchlist_model::{WatchlistItem, WatchlistRow};
use crate::Result;

/// Trait defining the contract for watchlist storage operations.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    fn get_items(&self) -> Result<Vec<WatchlistItem>>;
    async fn create_item(&self, item: WatchlistItem) -> Result<WatchlistItem>;
    async fn delete_item(&self, item_id: &str) -> Result<()>;
}

/// Trait defining the contract for watchlist service operations.
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    fn get_items(&self) -> Result<Vec<WatchlistItem>>;
    async fn add_symbol(&self, symbol: &str) -> Result<WatchlistItem>;
    async fn remove_item(&self, item_id: &str) -> Result<()>;
    fn watchlist_view(&self) -> Result<Vec<WatchlistRow>>;
}
