//! Scenario runner for validated and batch projections
//!
//! Holds the recognized input bounds once, then runs any number of plans,
//! batches, or return-rate sweeps against them.

use crate::error::SipResult;
use crate::plan::{PlanBounds, SipPlan};
use crate::projection::{calculate, generate_series, ProjectionResult, YearlySeries};
use serde::Serialize;

/// A projection paired with the chart series derived from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanProjection {
    pub plan: SipPlan,
    pub result: ProjectionResult,
    pub series: YearlySeries,
}

/// Bounds-checked projection runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let outcome = runner.run(&plan)?;
///
/// // Sweep the same plan across candidate return rates
/// let sweep = runner.run_rate_sweep(&plan, &[10.0, 12.0, 15.0])?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    bounds: PlanBounds,
}

impl ScenarioRunner {
    /// Runner with the default recognized bounds
    pub fn new() -> Self {
        Self {
            bounds: PlanBounds::default(),
        }
    }

    /// Runner with a caller-supplied bounds profile
    pub fn with_bounds(bounds: PlanBounds) -> Self {
        Self { bounds }
    }

    /// Validate one plan against the bounds and project it, including the
    /// chart series derived from the result
    pub fn run(&self, plan: &SipPlan) -> SipResult<PlanProjection> {
        self.bounds.validate(plan)?;
        let result = calculate(plan)?;
        let series = generate_series(&result, plan.whole_years())?;
        Ok(PlanProjection {
            plan: *plan,
            result,
            series,
        })
    }

    /// Project many plans; each failure is reported in place
    pub fn run_batch(&self, plans: &[SipPlan]) -> Vec<SipResult<PlanProjection>> {
        plans.iter().map(|plan| self.run(plan)).collect()
    }

    /// Project one plan across several candidate annual return rates
    pub fn run_rate_sweep(
        &self,
        plan: &SipPlan,
        annual_return_pcts: &[f64],
    ) -> SipResult<Vec<PlanProjection>> {
        annual_return_pcts
            .iter()
            .map(|&pct| self.run(&plan.with_annual_return_pct(pct)))
            .collect()
    }

    /// The bounds this runner validates against
    pub fn bounds(&self) -> &PlanBounds {
        &self.bounds
    }

    /// Mutable access to the bounds for customization
    pub fn bounds_mut(&mut self) -> &mut PlanBounds {
        &mut self.bounds
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
