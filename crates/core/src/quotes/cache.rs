use dashmap::DashMap;
use rust_decimal::Decimal;

use super::model::Quote;

/// In-memory cache of the most recently fetched quote per symbol.
///
/// Keys are uppercased symbols. Writes are serialized per symbol and are
/// last-write-wins when refresh cycles overlap; reads see a per-symbol
/// snapshot and may interleave freely with writes. Staleness, not
/// correctness, is the only risk of a lost race.
#[derive(Debug, Default)]
pub struct QuoteCache {
    quotes: DashMap<String, Quote>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the given quotes by uppercased symbol.
    ///
    /// Fields that are `None` in an incoming record keep the previously
    /// cached value; symbols not present in the batch are left untouched.
    /// There is no eviction.
    pub fn update(&self, quotes: &[Quote]) {
        for incoming in quotes {
            let key = incoming.symbol.trim().to_uppercase();
            if key.is_empty() {
                continue;
            }
            let mut entry = self.quotes.entry(key.clone()).or_insert_with(|| Quote {
                symbol: key,
                ..Default::default()
            });
            if let Some(name) = &incoming.name {
                entry.name = Some(name.clone());
            }
            if let Some(price) = incoming.price {
                entry.price = Some(price);
            }
            if let Some(change) = incoming.change_percent {
                entry.change_percent = Some(change);
            }
        }
    }

    /// Cached price for the symbol, or zero when no price is known.
    ///
    /// The zero default keeps valuation available while a quote is missing:
    /// an unpriced position contributes no market value until real data
    /// arrives, instead of failing the whole report.
    pub fn price_of(&self, symbol: &str) -> Decimal {
        self.quotes
            .get(&symbol.to_uppercase())
            .and_then(|q| q.price)
            .unwrap_or(Decimal::ZERO)
    }

    /// Cached change percent, or `None` when unknown.
    pub fn change_of(&self, symbol: &str) -> Option<Decimal> {
        self.quotes
            .get(&symbol.to_uppercase())
            .and_then(|q| q.change_percent)
    }

    /// Full cached quote for the symbol, if any.
    pub fn get(&self, symbol: &str) -> Option<Quote> {
        self.quotes
            .get(&symbol.to_uppercase())
            .map(|q| q.value().clone())
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
