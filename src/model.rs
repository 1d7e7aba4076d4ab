// Core structs: PriceBar, IndicatorSet, MarketClass
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Exchange class derived from the lexical form of a ticker. No network lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketClass {
    MainlandShanghai,
    MainlandShenzhen,
    HongKong,
    Us,
}

impl MarketClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketClass::MainlandShanghai => "mainland-shanghai",
            MarketClass::MainlandShenzhen => "mainland-shenzhen",
            MarketClass::HongKong => "hong-kong",
            MarketClass::Us => "us",
        }
    }
}

impl fmt::Display for MarketClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One trading day. Sequences are ascending by date with no duplicate dates;
/// gaps from the source feed are tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendLabel {
    BullishAligned,
    BearishAligned,
    Sideways,
}

impl TrendLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::BullishAligned => "bullish-aligned",
            TrendLabel::BearishAligned => "bearish-aligned",
            TrendLabel::Sideways => "sideways",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeLabel {
    HighVolume,
    LowVolume,
    Stable,
}

impl VolumeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeLabel::HighVolume => "high-volume",
            VolumeLabel::LowVolume => "low-volume",
            VolumeLabel::Stable => "stable",
        }
    }
}

impl fmt::Display for VolumeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot computed from a price series. Built fresh per request,
/// never mutated; numeric fields are rounded to 2 decimals at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSet {
    pub ma_short: f64,
    pub ma_mid: f64,
    pub ma_long: f64,
    pub latest_close: f64,
    pub bias_percent: f64,
    pub trend: TrendLabel,
    pub volume: VolumeLabel,
    pub recent_high: f64,
    pub recent_low: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid ticker: {0:?}")]
    InvalidTicker(String),
    #[error("insufficient data: need {needed} bars, got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("reference moving average is zero")]
    DivisionByZero,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("no candles returned")]
    NoData,
}
