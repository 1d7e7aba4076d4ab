// Lexical market classification, no network access
use crate::model::{AnalysisError, MarketClass};

const SHANGHAI_PREFIXES: [&str; 3] = ["60", "68", "90"];
const SHENZHEN_PREFIXES: [&str; 3] = ["00", "30", "20"];

/// Maps a raw ticker string to its market class and normalized symbol.
///
/// Rules are applied in order, first match wins:
/// 1. "HK" prefix or ".HK" suffix -> Hong Kong, digits zero-padded to 5
/// 2. exactly 6 digits -> mainland, leading two digits pick the sub-market
/// 3. ".SH" / ".SZ" suffix -> mainland, suffix picks the sub-market
/// 4. anything else -> US, alphabetic portion uppercased
///
/// A 6-digit code with an unrecognized prefix is rejected rather than
/// defaulted to Shanghai.
pub fn classify(raw: &str) -> Result<(MarketClass, String), AnalysisError> {
    let code = raw.trim().to_uppercase();
    if code.is_empty() {
        return Err(AnalysisError::InvalidTicker(raw.to_string()));
    }

    if code.starts_with("HK") || code.ends_with(".HK") {
        let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(AnalysisError::InvalidTicker(raw.to_string()));
        }
        return Ok((MarketClass::HongKong, format!("{:0>5}", digits)));
    }

    if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
        let prefix = &code[..2];
        if SHANGHAI_PREFIXES.contains(&prefix) {
            return Ok((MarketClass::MainlandShanghai, code));
        }
        if SHENZHEN_PREFIXES.contains(&prefix) {
            return Ok((MarketClass::MainlandShenzhen, code));
        }
        return Err(AnalysisError::InvalidTicker(raw.to_string()));
    }

    if let Some(symbol) = code.strip_suffix(".SH") {
        if symbol.is_empty() {
            return Err(AnalysisError::InvalidTicker(raw.to_string()));
        }
        return Ok((MarketClass::MainlandShanghai, symbol.to_string()));
    }
    if let Some(symbol) = code.strip_suffix(".SZ") {
        if symbol.is_empty() {
            return Err(AnalysisError::InvalidTicker(raw.to_string()));
        }
        return Ok((MarketClass::MainlandShenzhen, symbol.to_string()));
    }

    // Exchange suffixes like ".O" or ".N" are noise for the US case.
    let base = code.split('.').next().unwrap_or("");
    let letters: String = base.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return Err(AnalysisError::InvalidTicker(raw.to_string()));
    }
    Ok((MarketClass::Us, letters))
}
