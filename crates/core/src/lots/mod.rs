//! Portfolio lot management.
//!
//! A lot is a single purchase of a symbol. The service layer validates and
//! uppercases incoming lots; storage is behind [`LotRepositoryTrait`].

pub mod lots_model;
pub mod lots_service;
pub mod lots_traits;

#[cfg(test)]
mod lots_service_tests;

pub use lots_model::{Lot, NewLot};
pub use lots_service::LotService;
pub use lots_traits::{LotRepositoryTrait, LotServiceTrait};
