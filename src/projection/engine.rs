//! The three SIP calculators
//!
//! Each calculator validates its inputs up front, then assembles a
//! `ProjectionResult` from the shared annuity math. Nothing here rounds or
//! formats; display concerns live in the display module.

use crate::error::{SipError, SipResult};
use crate::plan::{BasicPlan, GoalPlan, SipPlan, StepUpPlan};
use crate::projection::annuity::{
    annuity_due_fv, annuity_due_payment, monthly_rate, real_monthly_rate, wealth_multiple,
    RATE_EPSILON,
};
use crate::projection::result::ProjectionResult;

/// Run the calculator for whichever mode the plan selects
pub fn calculate(plan: &SipPlan) -> SipResult<ProjectionResult> {
    match plan {
        SipPlan::Basic(p) => calculate_basic(p),
        SipPlan::StepUp(p) => calculate_step_up(p),
        SipPlan::Goal(p) => calculate_goal(p),
    }
}

/// Project a level SIP: a fixed contribution at the start of every month
///
/// The inflation-adjusted value reruns the same annuity at the Fisher real
/// rate, so it answers "what is this worth in today's money".
pub fn calculate_basic(plan: &BasicPlan) -> SipResult<ProjectionResult> {
    require_positive("monthly_investment", plan.monthly_investment)?;
    require_positive("years", plan.years)?;
    let rate = checked_monthly_rate("annual_return_pct", plan.annual_return_pct)?;
    check_inflation("annual_inflation_pct", plan.annual_inflation_pct)?;

    let months = plan.years * 12.0;
    let total_invested = plan.monthly_investment * months;
    let total_value = annuity_due_fv(plan.monthly_investment, months, rate)?;

    let real_rate = real_monthly_rate(plan.annual_return_pct, plan.annual_inflation_pct)?;
    let inflation_adjusted_value = annuity_due_fv(plan.monthly_investment, months, real_rate)?;

    Ok(ProjectionResult {
        total_invested,
        total_returns: total_value - total_invested,
        total_value,
        inflation_adjusted_value,
        wealth_multiple: wealth_multiple(total_value, total_invested)?,
        required_monthly_contribution: None,
    })
}

/// Project a step-up SIP: the contribution rises by a fixed percentage each
/// year while earlier years keep compounding at the annual return rate
///
/// This mode does not deflate its outcome, so the inflation-adjusted value
/// equals the nominal one.
pub fn calculate_step_up(plan: &StepUpPlan) -> SipResult<ProjectionResult> {
    require_positive(
        "initial_monthly_investment",
        plan.initial_monthly_investment,
    )?;
    if plan.years == 0 {
        return Err(SipError::invalid("years", "must be at least 1"));
    }
    let rate = checked_monthly_rate("annual_return_pct", plan.annual_return_pct)?;
    if !plan.annual_step_up_pct.is_finite() || plan.annual_step_up_pct < 0.0 {
        return Err(SipError::invalid(
            "annual_step_up_pct",
            format!("must be zero or positive, got {}", plan.annual_step_up_pct),
        ));
    }

    let annual_growth = 1.0 + plan.annual_return_pct / 100.0;
    let step_factor = 1.0 + plan.annual_step_up_pct / 100.0;

    let mut monthly = plan.initial_monthly_investment;
    let mut total_invested = 0.0;
    let mut total_value = 0.0;

    for _ in 0..plan.years {
        let year_fv = annuity_due_fv(monthly, 12.0, rate)?;
        total_value = total_value * annual_growth + year_fv;
        total_invested += monthly * 12.0;
        monthly *= step_factor;
    }

    Ok(ProjectionResult {
        total_invested,
        total_returns: total_value - total_invested,
        total_value,
        inflation_adjusted_value: total_value,
        wealth_multiple: wealth_multiple(total_value, total_invested)?,
        required_monthly_contribution: None,
    })
}

/// Solve a goal SIP: inflate the target to its future cost, then invert the
/// annuity-due formula for the contribution that reaches it
///
/// The inflation-adjusted value reports the original target, the real-terms
/// goal the future corpus is meant to be worth.
pub fn calculate_goal(plan: &GoalPlan) -> SipResult<ProjectionResult> {
    require_positive("target_amount", plan.target_amount)?;
    require_positive("years", plan.years)?;
    let rate = checked_monthly_rate("annual_return_pct", plan.annual_return_pct)?;
    check_inflation("annual_inflation_pct", plan.annual_inflation_pct)?;

    let months = plan.years * 12.0;
    let inflated_target =
        plan.target_amount * (1.0 + plan.annual_inflation_pct / 100.0).powf(plan.years);
    let required = annuity_due_payment(inflated_target, months, rate)?;
    let total_invested = required * months;

    Ok(ProjectionResult {
        total_invested,
        total_returns: inflated_target - total_invested,
        total_value: inflated_target,
        inflation_adjusted_value: plan.target_amount,
        wealth_multiple: wealth_multiple(inflated_target, total_invested)?,
        required_monthly_contribution: Some(required),
    })
}

fn require_positive(field: &'static str, value: f64) -> SipResult<()> {
    if !value.is_finite() {
        return Err(SipError::invalid(
            field,
            format!("must be a finite number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(SipError::invalid(
            field,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(())
}

fn check_inflation(field: &'static str, value: f64) -> SipResult<()> {
    if !value.is_finite() {
        return Err(SipError::invalid(
            field,
            format!("must be a finite number, got {value}"),
        ));
    }
    if value <= -100.0 {
        return Err(SipError::invalid(
            field,
            format!("must be above -100%, got {value}"),
        ));
    }
    Ok(())
}

/// A monthly rate of exactly -1 is left for the annuity formulas to reject
/// as division by zero; anything beyond that is an invalid input here.
fn checked_monthly_rate(field: &'static str, annual_pct: f64) -> SipResult<f64> {
    if !annual_pct.is_finite() {
        return Err(SipError::invalid(
            field,
            format!("must be a finite number, got {annual_pct}"),
        ));
    }
    let rate = monthly_rate(annual_pct);
    if rate < -1.0 && (rate + 1.0).abs() >= RATE_EPSILON {
        return Err(SipError::invalid(
            field,
            format!("annual rate of {annual_pct}% has no meaningful growth factor"),
        ));
    }
    Ok(rate)
}
