//! SIP Calculator CLI
//!
//! Projects a single plan and prints the results panel figures alongside the
//! year-by-year chart series. With no subcommand it projects the same demo
//! plan the calculator shows on first load.

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use sip_calculator::display::{format_currency, format_multiple};
use sip_calculator::{BasicPlan, GoalPlan, PlanProjection, ScenarioRunner, SipPlan, StepUpPlan};
use std::fs::File;
use std::io::Write;

const SERIES_CSV_PATH: &str = "sip_projection.csv";

#[derive(Parser)]
#[command(
    name = "sip_calculator",
    about = "Systematic investment plan projections",
    version
)]
struct Cli {
    /// Print the projection as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Skip writing the per-year series CSV
    #[arg(long)]
    no_csv: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Fixed monthly contribution
    Basic {
        /// Contribution per month
        #[arg(long, default_value_t = 5000.0)]
        monthly: f64,
        /// Investment horizon in years
        #[arg(long, default_value_t = 10.0)]
        years: f64,
        /// Expected annual return, percent
        #[arg(long = "return", default_value_t = 12.0)]
        annual_return: f64,
        /// Expected annual inflation, percent
        #[arg(long, default_value_t = 6.0)]
        inflation: f64,
    },
    /// Contribution that steps up every year
    StepUp {
        /// Contribution per month during the first year
        #[arg(long, default_value_t = 5000.0)]
        initial: f64,
        /// Investment horizon in whole years
        #[arg(long, default_value_t = 10)]
        years: u32,
        /// Expected annual return, percent
        #[arg(long = "return", default_value_t = 12.0)]
        annual_return: f64,
        /// Annual increase in the contribution, percent
        #[arg(long = "step-up", default_value_t = 10.0)]
        step_up: f64,
    },
    /// Solve for the contribution that reaches a target
    Goal {
        /// Target amount in today's money
        #[arg(long, default_value_t = 10_000_000.0)]
        target: f64,
        /// Investment horizon in years
        #[arg(long, default_value_t = 15.0)]
        years: f64,
        /// Expected annual return, percent
        #[arg(long = "return", default_value_t = 12.0)]
        annual_return: f64,
        /// Expected annual inflation, percent
        #[arg(long, default_value_t = 6.0)]
        inflation: f64,
    },
}

impl Mode {
    fn into_plan(self) -> SipPlan {
        match self {
            Mode::Basic {
                monthly,
                years,
                annual_return,
                inflation,
            } => SipPlan::Basic(BasicPlan {
                monthly_investment: monthly,
                years,
                annual_return_pct: annual_return,
                annual_inflation_pct: inflation,
            }),
            Mode::StepUp {
                initial,
                years,
                annual_return,
                step_up,
            } => SipPlan::StepUp(StepUpPlan {
                initial_monthly_investment: initial,
                years,
                annual_return_pct: annual_return,
                annual_step_up_pct: step_up,
            }),
            Mode::Goal {
                target,
                years,
                annual_return,
                inflation,
            } => SipPlan::Goal(GoalPlan {
                target_amount: target,
                years,
                annual_return_pct: annual_return,
                annual_inflation_pct: inflation,
            }),
        }
    }
}

/// Default projection shown when no subcommand is given
fn demo_plan() -> SipPlan {
    SipPlan::Basic(BasicPlan {
        monthly_investment: 5000.0,
        years: 10.0,
        annual_return_pct: 12.0,
        annual_inflation_pct: 6.0,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let plan = cli.mode.map(Mode::into_plan).unwrap_or_else(demo_plan);

    let runner = ScenarioRunner::new();
    let outcome = runner
        .run(&plan)
        .with_context(|| format!("projection failed for {} plan", plan.mode_name()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print_projection(&outcome);

    if !cli.no_csv {
        write_series_csv(&outcome)?;
        println!("\nFull series written to: {SERIES_CSV_PATH}");
    }

    Ok(())
}

fn print_projection(outcome: &PlanProjection) {
    println!("SIP Calculator v0.1.0");
    println!("=====================\n");

    println!("Plan: {}", outcome.plan.mode_name());
    match &outcome.plan {
        SipPlan::Basic(p) => {
            println!("  Monthly Investment: {}", format_currency(p.monthly_investment));
            println!("  Period: {} years", p.years);
            println!("  Expected Return: {}%", p.annual_return_pct);
            println!("  Inflation: {}%", p.annual_inflation_pct);
        }
        SipPlan::StepUp(p) => {
            println!(
                "  Starting Investment: {}",
                format_currency(p.initial_monthly_investment)
            );
            println!("  Period: {} years", p.years);
            println!("  Expected Return: {}%", p.annual_return_pct);
            println!("  Annual Step-Up: {}%", p.annual_step_up_pct);
        }
        SipPlan::Goal(p) => {
            println!("  Target Amount: {}", format_currency(p.target_amount));
            println!("  Period: {} years", p.years);
            println!("  Expected Return: {}%", p.annual_return_pct);
            println!("  Inflation: {}%", p.annual_inflation_pct);
        }
    }
    println!();

    let result = &outcome.result;
    println!("Results:");
    println!("  Total Investment:     {}", format_currency(result.total_invested));
    println!("  Expected Returns:     {}", format_currency(result.total_returns));
    println!("  Total Value:          {}", format_currency(result.total_value));
    println!(
        "  Inflation Adjusted:   {}",
        format_currency(result.inflation_adjusted_value)
    );
    println!("  Wealth Multiple:      {}", format_multiple(result.wealth_multiple));
    if let Some(required) = result.required_monthly_contribution {
        println!("  Required Monthly SIP: {}", format_currency(required));
    }
    let maturity_year = Utc::now().year() + outcome.plan.whole_years() as i32;
    println!("  Maturity Year:        {maturity_year}");

    println!();
    println!("{:>8} {:>16} {:>16}", "Year", "Invested", "Value");
    println!("{}", "-".repeat(42));
    for point in outcome.series.points() {
        println!(
            "{:>8} {:>16.2} {:>16.2}",
            point.label, point.invested, point.value
        );
    }
}

fn write_series_csv(outcome: &PlanProjection) -> Result<()> {
    let mut file = File::create(SERIES_CSV_PATH)
        .with_context(|| format!("unable to create {SERIES_CSV_PATH}"))?;

    writeln!(file, "Year,Invested,Value")?;
    for point in outcome.series.points() {
        writeln!(
            file,
            "{},{:.2},{:.2}",
            point.label, point.invested, point.value
        )?;
    }

    Ok(())
}
