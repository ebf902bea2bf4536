//! Transaction ledger.
//!
//! Plain income/expense records with no derived computation; the amount's
//! sign is the only classification.

pub mod transactions_model;
pub mod transactions_service;
pub mod transactions_traits;

#[cfg(test)]
mod transactions_service_tests;

pub use transactions_model::{NewTransaction, Transaction};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
