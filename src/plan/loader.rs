//! Load plans from sip_plans.csv

use super::{BasicPlan, GoalPlan, SipPlan, StepUpPlan};
use anyhow::{anyhow, bail, Context, Result};
use csv::Reader;
use std::path::Path;

/// Default plan worksheet location
pub const DEFAULT_PLANS_PATH: &str = "sip_plans.csv";

/// Raw CSV row matching sip_plans.csv columns
///
/// Columns that do not apply to a row's mode are left empty.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Mode")]
    mode: String,
    #[serde(rename = "MonthlyInvestment")]
    monthly_investment: Option<f64>,
    #[serde(rename = "TargetAmount")]
    target_amount: Option<f64>,
    #[serde(rename = "Years")]
    years: f64,
    #[serde(rename = "AnnualReturnPct")]
    annual_return_pct: f64,
    #[serde(rename = "AnnualInflationPct")]
    annual_inflation_pct: Option<f64>,
    #[serde(rename = "AnnualStepUpPct")]
    annual_step_up_pct: Option<f64>,
}

impl CsvRow {
    fn to_plan(self) -> Result<SipPlan> {
        let plan = match self.mode.as_str() {
            "basic" => SipPlan::Basic(BasicPlan {
                monthly_investment: self.require(self.monthly_investment, "MonthlyInvestment")?,
                years: self.years,
                annual_return_pct: self.annual_return_pct,
                annual_inflation_pct: self.require(self.annual_inflation_pct, "AnnualInflationPct")?,
            }),
            "step_up" => {
                if self.years.fract() != 0.0 || self.years < 0.0 {
                    bail!("step_up rows need a whole number of Years, got {}", self.years);
                }
                SipPlan::StepUp(StepUpPlan {
                    initial_monthly_investment: self
                        .require(self.monthly_investment, "MonthlyInvestment")?,
                    years: self.years as u32,
                    annual_return_pct: self.annual_return_pct,
                    annual_step_up_pct: self.annual_step_up_pct.unwrap_or(0.0),
                })
            }
            "goal" => SipPlan::Goal(GoalPlan {
                target_amount: self.require(self.target_amount, "TargetAmount")?,
                years: self.years,
                annual_return_pct: self.annual_return_pct,
                annual_inflation_pct: self.require(self.annual_inflation_pct, "AnnualInflationPct")?,
            }),
            other => bail!("unknown Mode `{other}` (expected basic, step_up, or goal)"),
        };
        Ok(plan)
    }

    fn require(&self, value: Option<f64>, column: &str) -> Result<f64> {
        value.ok_or_else(|| anyhow!("Mode `{}` requires the {column} column", self.mode))
    }
}

/// Load all plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<SipPlan>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)
        .with_context(|| format!("failed to open plan worksheet {}", path.display()))?;
    read_plans(reader)
}

/// Load plans from any reader (e.g., string buffer, network stream)
pub fn load_plans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<SipPlan>> {
    read_plans(Reader::from_reader(reader))
}

/// Load plans from the default sip_plans.csv location
pub fn load_default_plans() -> Result<Vec<SipPlan>> {
    load_plans(DEFAULT_PLANS_PATH)
}

fn read_plans<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<SipPlan>> {
    let mut plans = Vec::new();

    // row numbering counts the header line, so data rows start at 2
    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result.with_context(|| format!("bad record at row {}", index + 2))?;
        let plan = row
            .to_plan()
            .with_context(|| format!("bad plan at row {}", index + 2))?;
        plans.push(plan);
    }

    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_plans() {
        let plans = load_default_plans().expect("Failed to load plans");
        assert_eq!(plans.len(), 8);

        // Check the first plan
        match &plans[0] {
            SipPlan::Basic(p) => {
                assert_eq!(p.monthly_investment, 5000.0);
                assert_eq!(p.years, 10.0);
                assert_eq!(p.annual_return_pct, 12.0);
            }
            other => panic!("expected a basic plan, got {other:?}"),
        }

        // Check a goal plan further down
        match &plans[4] {
            SipPlan::Goal(p) => {
                assert_eq!(p.target_amount, 10_000_000.0);
                assert_eq!(p.annual_inflation_pct, 6.0);
            }
            other => panic!("expected a goal plan, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_reader_covers_all_modes() {
        let csv = "\
Mode,MonthlyInvestment,TargetAmount,Years,AnnualReturnPct,AnnualInflationPct,AnnualStepUpPct
basic,5000,,10,12,6,
step_up,5000,,10,12,,10
goal,,10000000,15,12,6,
";
        let plans = load_plans_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].mode_name(), "basic");
        assert_eq!(plans[1].mode_name(), "step_up");
        assert_eq!(plans[2].mode_name(), "goal");
    }

    #[test]
    fn test_step_up_defaults_to_zero_step() {
        let csv = "\
Mode,MonthlyInvestment,TargetAmount,Years,AnnualReturnPct,AnnualInflationPct,AnnualStepUpPct
step_up,5000,,10,12,,
";
        let plans = load_plans_from_reader(csv.as_bytes()).unwrap();
        match &plans[0] {
            SipPlan::StepUp(p) => assert_eq!(p.annual_step_up_pct, 0.0),
            other => panic!("expected a step_up plan, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let csv = "\
Mode,MonthlyInvestment,TargetAmount,Years,AnnualReturnPct,AnnualInflationPct,AnnualStepUpPct
lumpsum,5000,,10,12,6,
";
        let err = load_plans_from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown Mode `lumpsum`"));
    }

    #[test]
    fn test_missing_required_column_is_rejected() {
        let csv = "\
Mode,MonthlyInvestment,TargetAmount,Years,AnnualReturnPct,AnnualInflationPct,AnnualStepUpPct
goal,,,15,12,6,
";
        let err = load_plans_from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("TargetAmount"));
    }

    #[test]
    fn test_fractional_step_up_years_are_rejected() {
        let csv = "\
Mode,MonthlyInvestment,TargetAmount,Years,AnnualReturnPct,AnnualInflationPct,AnnualStepUpPct
step_up,5000,,10.5,12,,10
";
        let err = load_plans_from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("whole number of Years"));
    }
}
