#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::lots::lots_model::{Lot, NewLot};
    use crate::lots::lots_service::LotService;
    use crate::lots::lots_traits::{LotRepositoryTrait, LotServiceTrait};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock LotRepository
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockLotRepository {
        lots: Arc<Mutex<Vec<Lot>>>,
    }

    impl MockLotRepository {
        fn new() -> Self {
            Self::default()
        }

        fn get_all(&self) -> Vec<Lot> {
            self.lots.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LotRepositoryTrait for MockLotRepository {
        fn get_lots(&self) -> Result<Vec<Lot>> {
            Ok(self.lots.lock().unwrap().clone())
        }

        async fn create_lot(&self, lot: Lot) -> Result<Lot> {
            self.lots.lock().unwrap().push(lot.clone());
            Ok(lot)
        }

        async fn delete_lot(&self, lot_id: &str) -> Result<()> {
            let mut lots = self.lots.lock().unwrap();
            let before = lots.len();
            lots.retain(|l| l.id != lot_id);
            if lots.len() == before {
                return Err(Error::NotFound(format!("Lot {} not found", lot_id)));
            }
            Ok(())
        }
    }

    fn new_lot(symbol: &str, shares: rust_decimal::Decimal) -> NewLot {
        NewLot {
            symbol: symbol.to_string(),
            shares,
            cost_basis: dec!(100),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_add_lot_uppercases_symbol_and_assigns_id() {
        let repository = MockLotRepository::new();
        let service = LotService::new(Arc::new(repository.clone()));

        let lot = service.add_lot(new_lot(" aapl ", dec!(10))).await.unwrap();

        assert_eq!(lot.symbol, "AAPL");
        assert!(!lot.id.is_empty());
        assert_eq!(lot.shares, dec!(10));
        assert_eq!(repository.get_all().len(), 1);
    }

    #[tokio::test]
    async fn test_add_lot_rejects_empty_symbol() {
        let service = LotService::new(Arc::new(MockLotRepository::new()));

        let result = service.add_lot(new_lot("   ", dec!(10))).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_lot_rejects_non_positive_shares() {
        let service = LotService::new(Arc::new(MockLotRepository::new()));

        assert!(matches!(
            service.add_lot(new_lot("AAPL", dec!(0))).await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.add_lot(new_lot("AAPL", dec!(-5))).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_add_lot_rejects_negative_cost_basis() {
        let service = LotService::new(Arc::new(MockLotRepository::new()));

        let mut lot = new_lot("AAPL", dec!(10));
        lot.cost_basis = dec!(-1);

        assert!(matches!(
            service.add_lot(lot).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_add_lot_allows_zero_cost_basis() {
        let service = LotService::new(Arc::new(MockLotRepository::new()));

        let mut lot = new_lot("AAPL", dec!(10));
        lot.cost_basis = dec!(0);

        assert!(service.add_lot(lot).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_lot_propagates_not_found() {
        let repository = MockLotRepository::new();
        let service = LotService::new(Arc::new(repository.clone()));

        let lot = service.add_lot(new_lot("MSFT", dec!(3))).await.unwrap();
        service.remove_lot(&lot.id).await.unwrap();
        assert!(repository.get_all().is_empty());

        let result = service.remove_lot("missing-id").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_lots_preserves_repository_order() {
        let repository = MockLotRepository::new();
        let service = LotService::new(Arc::new(repository));

        service.add_lot(new_lot("MSFT", dec!(1))).await.unwrap();
        service.add_lot(new_lot("AAPL", dec!(2))).await.unwrap();
        service.add_lot(new_lot("MSFT", dec!(3))).await.unwrap();

        let symbols: Vec<String> = service
            .get_lots()
            .unwrap()
            .into_iter()
            .map(|l| l.symbol)
            .collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL", "MSFT"]);
    }
}
