pub mod yahoo;

pub use yahoo::YahooChartProvider;

use crate::model::{MarketClass, PriceBar, ProviderError};

/// Daily price-history source. Implementations may fail or return fewer
/// bars than requested; the caller treats a short series as insufficient
/// data. Retry policy, if any, belongs to the implementation's owner.
#[async_trait::async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    async fn fetch_daily(
        &self,
        symbol: &str,
        market: MarketClass,
        range_days: u32,
    ) -> Result<Vec<PriceBar>, ProviderError>;
}
