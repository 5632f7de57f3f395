use crate::series::{DateRange, PriceSeries, Symbol};
use anyhow::Result;
use async_trait::async_trait;

/// A source of historical daily closing prices.
///
/// Implementations are shared across requests, so they hold no per-request
/// state.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Short name the provider is keyed by, e.g. `"yahoo"`.
    fn name(&self) -> &'static str;

    /// Closing prices of `symbol` for every trading day in `range`, ascending by date.
    async fn closing_prices(&self, symbol: &Symbol, range: &DateRange) -> Result<PriceSeries>;
}
