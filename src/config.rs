use crate::analyzer::{DisciplineConfig, IndicatorConfig};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub tickers: Vec<String>,
    #[serde(default)]
    pub indicators: IndicatorConfig,
    #[serde(default)]
    pub discipline: DisciplineConfig,
    /// Calendar days of history requested from the provider.
    #[serde(default = "default_range_days")]
    pub range_days: u32,
    /// Exchange holidays, ISO dates.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Skip the trading-day gate.
    #[serde(default)]
    pub force_run: bool,
    /// 0 runs once and exits; anything else re-runs on that interval.
    #[serde(default)]
    pub check_interval_seconds: u64,
}

fn default_range_days() -> u32 {
    120
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{"tickers": ["600519", "AAPL"]}"#).unwrap();
        assert_eq!(cfg.tickers.len(), 2);
        assert_eq!(cfg.range_days, 120);
        assert_eq!(cfg.indicators.windows.short, 5);
        assert_eq!(cfg.indicators.volume_window, 5);
        assert_eq!(cfg.discipline.bias_threshold, 5.0);
        assert!(!cfg.force_run);
        assert_eq!(cfg.check_interval_seconds, 0);
    }

    #[test]
    fn full_config_round_trips() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{
                "tickers": ["hk00700"],
                "indicators": {
                    "windows": { "short": 5, "mid": 10, "long": 20 },
                    "volume_window": 10,
                    "bias_window": 20
                },
                "discipline": { "bias_threshold": 4.0 },
                "range_days": 180,
                "holidays": ["2026-10-01", "2026-10-02"],
                "force_run": true
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.indicators.volume_window, 10);
        assert_eq!(cfg.indicators.bias_window, Some(20));
        assert_eq!(cfg.discipline.bias_threshold, 4.0);
        assert_eq!(cfg.holidays.len(), 2);
        assert!(cfg.force_run);
    }
}
