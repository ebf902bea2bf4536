#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::transactions::transactions_model::{NewTransaction, Transaction};
    use crate::transactions::transactions_service::TransactionService;
    use crate::transactions::transactions_traits::{
        TransactionRepositoryTrait, TransactionServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockTransactionRepository {
        transactions: Arc<Mutex<Vec<Transaction>>>,
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn get_transactions(&self) -> Result<Vec<Transaction>> {
            Ok(self.transactions.lock().unwrap().clone())
        }

        async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction> {
            self.transactions.lock().unwrap().push(transaction.clone());
            Ok(transaction)
        }

        async fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
            let mut transactions = self.transactions.lock().unwrap();
            let before = transactions.len();
            transactions.retain(|t| t.id != transaction_id);
            if transactions.len() == before {
                return Err(Error::NotFound(format!(
                    "Transaction {} not found",
                    transaction_id
                )));
            }
            Ok(())
        }
    }

    fn new_transaction(description: &str, amount: Decimal) -> NewTransaction {
        NewTransaction {
            description: description.to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_add_and_list_transactions() {
        let service = TransactionService::new(Arc::new(MockTransactionRepository::default()));

        service
            .add_transaction(new_transaction("Salary", dec!(2500)))
            .await
            .unwrap();
        service
            .add_transaction(new_transaction("Rent", dec!(-1200)))
            .await
            .unwrap();

        let transactions = service.get_transactions().unwrap();
        assert_eq!(transactions.len(), 2);
        assert!(!transactions[0].is_outflow());
        assert!(transactions[1].is_outflow());
    }

    #[tokio::test]
    async fn test_add_transaction_rejects_blank_description() {
        let service = TransactionService::new(Arc::new(MockTransactionRepository::default()));

        let result = service.add_transaction(new_transaction("  ", dec!(5))).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_remove_transaction_propagates_not_found() {
        let service = TransactionService::new(Arc::new(MockTransactionRepository::default()));

        let tx = service
            .add_transaction(new_transaction("Coffee", dec!(-4.5)))
            .await
            .unwrap();
        service.remove_transaction(&tx.id).await.unwrap();

        let result = service.remove_transaction(&tx.id).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_zero_amount_is_not_an_outflow() {
        let tx = Transaction {
            id: "t1".to_string(),
            description: "Adjustment".to_string(),
            amount: Decimal::ZERO,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert!(!tx.is_outflow());
    }
}
