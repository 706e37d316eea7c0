//! Projection engine: per-mode calculators and the chart series generator

pub mod annuity;
mod engine;
mod result;
mod series;

pub use engine::{calculate, calculate_basic, calculate_goal, calculate_step_up};
pub use result::ProjectionResult;
pub use series::{generate_series, SeriesPoint, YearlySeries};
