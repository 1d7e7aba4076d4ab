// Analyzer module: aggregates the indicator engine and trading-rule checks.

pub mod discipline;
pub mod indicators;

// Re-export the main entry points for ease of use.
pub use discipline::{evaluate, DisciplineCheck, DisciplineConfig};
pub use indicators::{compute, IndicatorConfig, MaWindows};
