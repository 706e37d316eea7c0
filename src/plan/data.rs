//! Plan parameter records, one per investment mode

use serde::{Deserialize, Serialize};

/// Parameters for a level SIP with a fixed monthly contribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicPlan {
    /// Contribution per month, in currency units
    pub monthly_investment: f64,
    /// Investment horizon in years (fractional values are allowed)
    pub years: f64,
    /// Expected annual return, in percent (12.0 means 12%)
    pub annual_return_pct: f64,
    /// Expected annual inflation, in percent
    pub annual_inflation_pct: f64,
}

/// Parameters for a SIP whose contribution steps up once a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepUpPlan {
    /// Contribution per month during the first year
    pub initial_monthly_investment: f64,
    /// Investment horizon in whole years
    pub years: u32,
    /// Expected annual return, in percent
    pub annual_return_pct: f64,
    /// Annual increase applied to the contribution, in percent
    pub annual_step_up_pct: f64,
}

/// Parameters for a goal plan that solves for the required contribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    /// Target amount in today's money
    pub target_amount: f64,
    /// Investment horizon in years (fractional values are allowed)
    pub years: f64,
    /// Expected annual return, in percent
    pub annual_return_pct: f64,
    /// Expected annual inflation, in percent
    pub annual_inflation_pct: f64,
}

/// A SIP plan in one of the three investment modes
///
/// Mode selection is a sum type so that dispatch stays exhaustive: adding a
/// mode forces every match site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SipPlan {
    Basic(BasicPlan),
    StepUp(StepUpPlan),
    Goal(GoalPlan),
}

impl SipPlan {
    /// Mode name as used in worksheets and JSON payloads
    pub fn mode_name(&self) -> &'static str {
        match self {
            SipPlan::Basic(_) => "basic",
            SipPlan::StepUp(_) => "step_up",
            SipPlan::Goal(_) => "goal",
        }
    }

    /// Investment horizon in (possibly fractional) years
    pub fn years(&self) -> f64 {
        match self {
            SipPlan::Basic(p) => p.years,
            SipPlan::StepUp(p) => f64::from(p.years),
            SipPlan::Goal(p) => p.years,
        }
    }

    /// Horizon in whole years, as charted; fractional years are floored
    pub fn whole_years(&self) -> u32 {
        match self {
            SipPlan::Basic(p) => p.years.floor() as u32,
            SipPlan::StepUp(p) => p.years,
            SipPlan::Goal(p) => p.years.floor() as u32,
        }
    }

    /// Expected annual return, in percent
    pub fn annual_return_pct(&self) -> f64 {
        match self {
            SipPlan::Basic(p) => p.annual_return_pct,
            SipPlan::StepUp(p) => p.annual_return_pct,
            SipPlan::Goal(p) => p.annual_return_pct,
        }
    }

    /// Copy of this plan with the annual return replaced, for rate sweeps
    pub fn with_annual_return_pct(&self, annual_return_pct: f64) -> Self {
        let mut plan = *self;
        match &mut plan {
            SipPlan::Basic(p) => p.annual_return_pct = annual_return_pct,
            SipPlan::StepUp(p) => p.annual_return_pct = annual_return_pct,
            SipPlan::Goal(p) => p.annual_return_pct = annual_return_pct,
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_basic() -> BasicPlan {
        BasicPlan {
            monthly_investment: 5000.0,
            years: 10.0,
            annual_return_pct: 12.0,
            annual_inflation_pct: 6.0,
        }
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(SipPlan::Basic(sample_basic()).mode_name(), "basic");
        let step_up = SipPlan::StepUp(StepUpPlan {
            initial_monthly_investment: 5000.0,
            years: 10,
            annual_return_pct: 12.0,
            annual_step_up_pct: 10.0,
        });
        assert_eq!(step_up.mode_name(), "step_up");
        let goal = SipPlan::Goal(GoalPlan {
            target_amount: 1_000_000.0,
            years: 15.0,
            annual_return_pct: 12.0,
            annual_inflation_pct: 6.0,
        });
        assert_eq!(goal.mode_name(), "goal");
    }

    #[test]
    fn test_whole_years_floors_fractional_horizons() {
        let mut plan = sample_basic();
        plan.years = 10.5;
        assert_eq!(SipPlan::Basic(plan).whole_years(), 10);
        plan.years = 10.0;
        assert_eq!(SipPlan::Basic(plan).whole_years(), 10);
    }

    #[test]
    fn test_with_annual_return_pct_replaces_only_the_rate() {
        let plan = SipPlan::Basic(sample_basic());
        let swept = plan.with_annual_return_pct(15.0);
        assert_eq!(swept.annual_return_pct(), 15.0);
        assert_eq!(swept.years(), plan.years());
        match swept {
            SipPlan::Basic(p) => assert_eq!(p.monthly_investment, 5000.0),
            _ => panic!("sweep changed the plan mode"),
        }
    }

    #[test]
    fn test_plan_json_carries_mode_tag() {
        let plan = SipPlan::Basic(sample_basic());
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains(r#""mode":"basic"#));
        let parsed: SipPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
    }
}
