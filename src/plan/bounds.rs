//! Recognized input ranges for plan fields
//!
//! The calculators only guard their own arithmetic; these bounds express the
//! caller-side contract that inputs arrive range-checked, the way the entry
//! form clamps each field between its min and max attributes.

use crate::error::{SipError, SipResult};
use crate::plan::{BasicPlan, GoalPlan, SipPlan, StepUpPlan};
use serde::{Deserialize, Serialize};

/// Inclusive accepted range for a single numeric input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBound {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

impl FieldBound {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check a value against this range, naming the field on failure
    pub fn check(&self, field: &'static str, value: f64) -> SipResult<()> {
        if !value.is_finite() {
            return Err(SipError::invalid(
                field,
                format!("must be a finite number, got {value}"),
            ));
        }
        if value < self.min {
            return Err(SipError::invalid(
                field,
                format!("must be at least {}, got {value}", self.min),
            ));
        }
        if value > self.max {
            return Err(SipError::invalid(
                field,
                format!("must be at most {}, got {value}", self.max),
            ));
        }
        Ok(())
    }

    /// Whether a value lies inside this range
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Accepted ranges for every plan field
///
/// One bound per semantic field; the same range applies wherever the field
/// appears across modes (the basic contribution and the step-up starting
/// contribution share a range, as do the three horizon fields).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanBounds {
    /// Monthly contribution (basic) or first-year contribution (step-up)
    pub monthly_investment: FieldBound,
    /// Goal target amount in today's money
    pub target_amount: FieldBound,
    /// Investment horizon in years
    pub years: FieldBound,
    /// Expected annual return, in percent
    pub annual_return_pct: FieldBound,
    /// Expected annual inflation, in percent
    pub annual_inflation_pct: FieldBound,
    /// Annual step-up applied to the contribution, in percent
    pub annual_step_up_pct: FieldBound,
}

impl Default for PlanBounds {
    fn default() -> Self {
        Self {
            monthly_investment: FieldBound::new(500.0, 1_000_000.0),
            target_amount: FieldBound::new(10_000.0, 1_000_000_000.0),
            years: FieldBound::new(1.0, 40.0),
            annual_return_pct: FieldBound::new(1.0, 30.0),
            annual_inflation_pct: FieldBound::new(0.0, 15.0),
            annual_step_up_pct: FieldBound::new(0.0, 25.0),
        }
    }
}

impl PlanBounds {
    /// Validate every field of a plan against its recognized range
    pub fn validate(&self, plan: &SipPlan) -> SipResult<()> {
        match plan {
            SipPlan::Basic(p) => self.validate_basic(p),
            SipPlan::StepUp(p) => self.validate_step_up(p),
            SipPlan::Goal(p) => self.validate_goal(p),
        }
    }

    fn validate_basic(&self, plan: &BasicPlan) -> SipResult<()> {
        self.monthly_investment
            .check("monthly_investment", plan.monthly_investment)?;
        self.years.check("years", plan.years)?;
        self.annual_return_pct
            .check("annual_return_pct", plan.annual_return_pct)?;
        self.annual_inflation_pct
            .check("annual_inflation_pct", plan.annual_inflation_pct)?;
        Ok(())
    }

    fn validate_step_up(&self, plan: &StepUpPlan) -> SipResult<()> {
        self.monthly_investment
            .check("initial_monthly_investment", plan.initial_monthly_investment)?;
        self.years.check("years", f64::from(plan.years))?;
        self.annual_return_pct
            .check("annual_return_pct", plan.annual_return_pct)?;
        self.annual_step_up_pct
            .check("annual_step_up_pct", plan.annual_step_up_pct)?;
        Ok(())
    }

    fn validate_goal(&self, plan: &GoalPlan) -> SipResult<()> {
        self.target_amount.check("target_amount", plan.target_amount)?;
        self.years.check("years", plan.years)?;
        self.annual_return_pct
            .check("annual_return_pct", plan.annual_return_pct)?;
        self.annual_inflation_pct
            .check("annual_inflation_pct", plan.annual_inflation_pct)?;
        Ok(())
    }
}
