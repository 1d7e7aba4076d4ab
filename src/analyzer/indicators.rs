use crate::model::{AnalysisError, IndicatorSet, PriceBar, TrendLabel, VolumeLabel};
use crate::utils::round2;
use serde::Deserialize;

/// Moving-average window lengths in trading bars. All windows must be >= 1.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct MaWindows {
    pub short: usize,
    pub mid: usize,
    pub long: usize,
}

impl Default for MaWindows {
    fn default() -> Self {
        Self { short: 5, mid: 10, long: 20 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub windows: MaWindows,
    /// Trailing window for the volume average, inclusive of the latest bar.
    pub volume_window: usize,
    pub volume_ratio_high: f64,
    pub volume_ratio_low: f64,
    /// Lookback for recent_high / recent_low.
    pub swing_lookback: usize,
    /// Reference window for the bias computation; defaults to the short window.
    pub bias_window: Option<usize>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            windows: MaWindows::default(),
            volume_window: 5,
            volume_ratio_high: 1.2,
            volume_ratio_low: 0.8,
            swing_lookback: 20,
            bias_window: None,
        }
    }
}

impl IndicatorConfig {
    /// Minimum number of bars the computation needs. Windows must be >= 1.
    pub fn required_bars(&self) -> usize {
        self.windows
            .short
            .max(self.windows.mid)
            .max(self.windows.long)
            .max(self.volume_window)
            .max(self.swing_lookback)
            .max(self.bias_window.unwrap_or(0))
            .max(1)
    }
}

/// Computes the indicator snapshot for an ascending daily price series.
///
/// Pure and stateless: the same bars and config always yield the same
/// result. Fails as a whole when the series is shorter than the longest
/// configured window; no partially-filled snapshot is ever returned.
pub fn compute(bars: &[PriceBar], cfg: &IndicatorConfig) -> Result<IndicatorSet, AnalysisError> {
    let needed = cfg.required_bars();
    if bars.len() < needed {
        return Err(AnalysisError::InsufficientData { needed, got: bars.len() });
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let ma_short = trailing_mean(&closes, cfg.windows.short);
    let ma_mid = trailing_mean(&closes, cfg.windows.mid);
    let ma_long = trailing_mean(&closes, cfg.windows.long);

    let latest = &bars[bars.len() - 1];
    let ma_ref = trailing_mean(&closes, cfg.bias_window.unwrap_or(cfg.windows.short));
    if ma_ref == 0.0 {
        return Err(AnalysisError::DivisionByZero);
    }
    let bias = (latest.close - ma_ref) / ma_ref * 100.0;

    // Strict inequality on both legs; any tie reads as sideways.
    let trend = if ma_short > ma_mid && ma_mid > ma_long {
        TrendLabel::BullishAligned
    } else if ma_short < ma_mid && ma_mid < ma_long {
        TrendLabel::BearishAligned
    } else {
        TrendLabel::Sideways
    };

    let volume_tail = &bars[bars.len() - cfg.volume_window..];
    let avg_volume =
        volume_tail.iter().map(|b| b.volume as f64).sum::<f64>() / cfg.volume_window as f64;
    let latest_volume = latest.volume as f64;
    let volume = if latest_volume > avg_volume * cfg.volume_ratio_high {
        VolumeLabel::HighVolume
    } else if latest_volume < avg_volume * cfg.volume_ratio_low {
        VolumeLabel::LowVolume
    } else {
        VolumeLabel::Stable
    };

    let swing_tail = &bars[bars.len() - cfg.swing_lookback..];
    let recent_high = swing_tail.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let recent_low = swing_tail.iter().map(|b| b.low).fold(f64::MAX, f64::min);

    Ok(IndicatorSet {
        ma_short: round2(ma_short),
        ma_mid: round2(ma_mid),
        ma_long: round2(ma_long),
        latest_close: round2(latest.close),
        bias_percent: round2(bias),
        trend,
        volume,
        recent_high: round2(recent_high),
        recent_low: round2(recent_low),
    })
}

fn trailing_mean(values: &[f64], window: usize) -> f64 {
    let tail = &values[values.len() - window..];
    tail.iter().sum::<f64>() / window as f64
}
