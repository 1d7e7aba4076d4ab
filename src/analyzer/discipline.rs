// Chase-risk rule: a stock trading too far above its reference MA is
// flagged overextended, with the threshold relaxed for aligned uptrends.
use crate::model::{IndicatorSet, TrendLabel};
use crate::utils::round2;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisciplineConfig {
    /// Base bias ceiling in percent.
    pub bias_threshold: f64,
    /// Multiplier applied to the ceiling when the MAs are bullish-aligned.
    pub trend_relax_factor: f64,
}

impl Default for DisciplineConfig {
    fn default() -> Self {
        Self { bias_threshold: 5.0, trend_relax_factor: 1.6 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisciplineCheck {
    pub effective_bias_threshold: f64,
    pub overextended: bool,
    pub trend_ok: bool,
}

pub fn evaluate(set: &IndicatorSet, cfg: &DisciplineConfig) -> DisciplineCheck {
    let trend_ok = set.trend == TrendLabel::BullishAligned;
    let effective = if trend_ok {
        cfg.bias_threshold * cfg.trend_relax_factor
    } else {
        cfg.bias_threshold
    };
    DisciplineCheck {
        effective_bias_threshold: round2(effective),
        overextended: set.bias_percent > effective,
        trend_ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VolumeLabel;

    fn set_with(bias: f64, trend: TrendLabel) -> IndicatorSet {
        IndicatorSet {
            ma_short: 10.0,
            ma_mid: 10.0,
            ma_long: 10.0,
            latest_close: 10.0,
            bias_percent: bias,
            trend,
            volume: VolumeLabel::Stable,
            recent_high: 11.0,
            recent_low: 9.0,
        }
    }

    #[test]
    fn sideways_market_keeps_the_base_threshold() {
        let check = evaluate(&set_with(6.0, TrendLabel::Sideways), &DisciplineConfig::default());
        assert_eq!(check.effective_bias_threshold, 5.0);
        assert!(check.overextended);
        assert!(!check.trend_ok);
    }

    #[test]
    fn bullish_alignment_relaxes_the_threshold() {
        let check = evaluate(
            &set_with(6.0, TrendLabel::BullishAligned),
            &DisciplineConfig::default(),
        );
        assert_eq!(check.effective_bias_threshold, 8.0);
        assert!(!check.overextended);
        assert!(check.trend_ok);
    }

    #[test]
    fn bias_at_the_threshold_is_not_overextended() {
        let check = evaluate(&set_with(5.0, TrendLabel::Sideways), &DisciplineConfig::default());
        assert!(!check.overextended);
    }
}
