use async_trait::async_trait;

use super::lots_model::{Lot, NewLot};
use crate::Result;

/// Trait defining the contract for lot storage operations.
///
/// Implementations own persistence entirely; the core only requires that
/// `get_lots` preserves insertion order and that `delete_lot` reports an
/// unknown id as `Error::NotFound`.
#[async_trait]
pub trait LotRepositoryTrait: Send + Sync {
    fn get_lots(&self) -> Result<Vec<Lot>>;
    async fn create_lot(&self, lot: Lot) -> Result<Lot>;
    async fn delete_lot(&self, lot_id: &str) -> Result<()>;
}

/// Trait defining the contract for lot service operations.
#[async_trait]
pub trait LotServiceTrait: Send + Sync {
    fn get_lots(&self) -> Result<Vec<Lot>>;
    async fn add_lot(&self, new_lot: NewLot) -> Result<Lot>;
    async fn remove_lot(&self, lot_id: &str) -> Result<()>;
}
