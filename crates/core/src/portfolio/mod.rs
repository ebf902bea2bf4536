pub mod holdings;

pub use holdings::*;
