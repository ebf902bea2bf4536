use async_trait::async_trait;

use super::model::Quote;
use crate::Result;

/// Market data collaborator that resolves current quotes for symbols.
///
/// Transport and data source are implementation details of the surrounding
/// application. A failed fetch is reported as an error and treated as
/// "no update" by [`super::service::QuoteService`]; providers may also
/// return fewer quotes than requested symbols, or sparse quotes with some
/// fields missing.
#[async_trait]
pub trait QuoteProviderTrait: Send + Sync {
    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<Quote>>;
}
