// Utility functions

/// Rounds to 2 decimal places. Applied only at result boundaries so
/// intermediate computations keep full precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
