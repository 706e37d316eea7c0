//! SIP Calculator - projection engine for systematic investment plans
//!
//! This library provides:
//! - Three projection modes: level, annual step-up, and goal-seeking
//! - Closed-form annuity-due math with typed division-by-zero guards
//! - A per-year chart series generator for the invested/value curves
//! - An animated results panel with an owned, replaceable chart handle
//! - Bounds-validated single, batch, and rate-sweep runners

pub mod display;
pub mod error;
pub mod plan;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use display::{FormattedResult, ResultsPanel};
pub use error::{SipError, SipResult};
pub use plan::{BasicPlan, GoalPlan, PlanBounds, SipPlan, StepUpPlan};
pub use projection::{calculate, generate_series, ProjectionResult, YearlySeries};
pub use scenario::{PlanProjection, ScenarioRunner};
