// Yahoo Finance v8 chart feed
use crate::model::{MarketClass, PriceBar, ProviderError};
use crate::provider::PriceHistoryProvider;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

pub struct YahooChartProvider {
    client: Client,
}

impl YahooChartProvider {
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) marketlens/0.1")
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ProviderError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    fn build_url(&self, symbol: &str, market: MarketClass, range_days: u32) -> String {
        format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}d&interval=1d",
            feed_symbol(symbol, market),
            range_days
        )
    }
}

/// Maps a normalized symbol to the symbol the chart feed expects.
/// Shanghai trades as `.SS`, Shenzhen as `.SZ`, Hong Kong as a 4-digit
/// `.HK` code; US symbols pass through verbatim.
fn feed_symbol(symbol: &str, market: MarketClass) -> String {
    match market {
        MarketClass::MainlandShanghai => format!("{symbol}.SS"),
        MarketClass::MainlandShenzhen => format!("{symbol}.SZ"),
        MarketClass::HongKong => {
            format!("{:0>4}.HK", symbol.trim_start_matches('0'))
        }
        MarketClass::Us => symbol.to_string(),
    }
}

fn bars_from_chart(envelope: ChartEnvelope) -> Result<Vec<PriceBar>, ProviderError> {
    if let Some(err) = envelope.chart.error {
        return Err(ProviderError::InvalidResponse(err.to_string()));
    }
    let result = envelope
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or(ProviderError::NoData)?;
    let timestamps = result.timestamp.ok_or(ProviderError::NoData)?;
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or(ProviderError::NoData)?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        // The feed pads halted sessions with nulls; such candles are dropped
        // rather than forward-filled.
        let candle = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
            quote.volume.get(i).copied().flatten(),
        );
        let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = candle else {
            continue;
        };
        let date = DateTime::from_timestamp(*ts, 0)
            .ok_or_else(|| ProviderError::InvalidResponse(format!("bad timestamp {ts}")))?
            .date_naive();
        bars.push(PriceBar { date, open, high, low, close, volume });
    }

    if bars.is_empty() {
        return Err(ProviderError::NoData);
    }
    Ok(bars)
}

#[async_trait::async_trait]
impl PriceHistoryProvider for YahooChartProvider {
    async fn fetch_daily(
        &self,
        symbol: &str,
        market: MarketClass,
        range_days: u32,
    ) -> Result<Vec<PriceBar>, ProviderError> {
        let url = self.build_url(symbol, market, range_days);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProviderError::Http(format!("status {}", response.status())));
        }

        let envelope: ChartEnvelope = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        bars_from_chart(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_symbols_per_market() {
        assert_eq!(feed_symbol("600519", MarketClass::MainlandShanghai), "600519.SS");
        assert_eq!(feed_symbol("000001", MarketClass::MainlandShenzhen), "000001.SZ");
        assert_eq!(feed_symbol("00700", MarketClass::HongKong), "0700.HK");
        assert_eq!(feed_symbol("09988", MarketClass::HongKong), "9988.HK");
        assert_eq!(feed_symbol("AAPL", MarketClass::Us), "AAPL");
    }

    #[test]
    fn chart_payload_becomes_bars_and_nulls_are_dropped() {
        let payload = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704067200, 1704153600, 1704240000],
                    "indicators": {
                        "quote": [{
                            "open":   [10.0, null, 10.5],
                            "high":   [11.0, null, 11.5],
                            "low":    [9.0,  null, 10.0],
                            "close":  [10.5, null, 11.0],
                            "volume": [1000, null, 1200]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let envelope: ChartEnvelope = serde_json::from_str(payload).unwrap();
        let bars = bars_from_chart(envelope).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 10.5);
        assert_eq!(bars[1].volume, 1200);
        assert!(bars[0].date < bars[1].date);
    }

    #[test]
    fn feed_error_is_surfaced() {
        let payload = r#"{"chart":{"result":null,"error":{"code":"Not Found"}}}"#;
        let envelope: ChartEnvelope = serde_json::from_str(payload).unwrap();
        assert!(matches!(
            bars_from_chart(envelope),
            Err(ProviderError::InvalidResponse(_))
        ));
    }

    #[test]
    fn empty_result_is_no_data() {
        let payload = r#"{"chart":{"result":[],"error":null}}"#;
        let envelope: ChartEnvelope = serde_json::from_str(payload).unwrap();
        assert!(matches!(bars_from_chart(envelope), Err(ProviderError::NoData)));
    }
}
