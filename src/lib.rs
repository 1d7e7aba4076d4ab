//! Market classification and technical-indicator computation for mainland
//! China, Hong Kong and US tickers.
//!
//! The core is two pure components: [`classifier::classify`] maps a raw
//! ticker string to its market and normalized symbol, and
//! [`analyzer::compute`] derives a moving-average/bias snapshot from a daily
//! price series. Price history comes from an injected
//! [`provider::PriceHistoryProvider`]; report generation and delivery are
//! out of scope for this crate.

pub mod analyzer;
pub mod cache;
pub mod calendar;
pub mod classifier;
pub mod config;
pub mod model;
pub mod provider;
pub mod utils;
