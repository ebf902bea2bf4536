use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::lots_model::{Lot, NewLot};
use super::lots_traits::{LotRepositoryTrait, LotServiceTrait};
use crate::errors::ValidationError;
use crate::Result;

/// Service for managing portfolio lots.
pub struct LotService {
    lot_repository: Arc<dyn LotRepositoryTrait>,
}

impl LotService {
    pub fn new(lot_repository: Arc<dyn LotRepositoryTrait>) -> Self {
        Self { lot_repository }
    }

    fn validate(new_lot: &NewLot) -> Result<()> {
        if new_lot.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if new_lot.shares <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "shares must be positive, got {}",
                new_lot.shares
            ))
            .into());
        }
        if new_lot.cost_basis < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "cost basis must not be negative, got {}",
                new_lot.cost_basis
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl LotServiceTrait for LotService {
    fn get_lots(&self) -> Result<Vec<Lot>> {
        self.lot_repository.get_lots()
    }

    async fn add_lot(&self, new_lot: NewLot) -> Result<Lot> {
        Self::validate(&new_lot)?;
        let lot = Lot {
            id: Uuid::new_v4().to_string(),
            symbol: new_lot.symbol.trim().to_uppercase(),
            shares: new_lot.shares,
            cost_basis: new_lot.cost_basis,
            purchase_date: new_lot.purchase_date,
        };
        debug!(
            "Adding lot {}: {} shares of {} at {}",
            lot.id, lot.shares, lot.symbol, lot.cost_basis
        );
        self.lot_repository.create_lot(lot).await
    }

    async fn remove_lot(&self, lot_id: &str) -> Result<()> {
        debug!("Removing lot {}", lot_id);
        self.lot_repository.delete_lot(lot_id).await
    }
}
