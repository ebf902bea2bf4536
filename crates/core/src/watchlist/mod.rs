//! Symbol watchlist.
//!
//! Tracked symbols without positions, joined with cached quotes for
//! display.

pub mod watchlist_model;
pub mod watchlist_service;
pub mod watchlist_traits;


pub use watchlist_model::{WatchlistItem, WatchlistRow};
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
