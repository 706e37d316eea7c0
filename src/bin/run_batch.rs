//! Project every plan in a sip_plans.csv worksheet
//!
//! Outputs one results row per plan for comparison across modes and rates.

use anyhow::{Context, Result};
use chrono::Utc;
use rayon::prelude::*;
use sip_calculator::display::format_currency;
use sip_calculator::plan::loader::{load_plans, DEFAULT_PLANS_PATH};
use sip_calculator::{PlanProjection, ScenarioRunner, SipResult};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

const OUTPUT_PATH: &str = "batch_results.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PLANS_PATH.to_string());

    let start = Instant::now();
    println!("Loading plans from {path}...");

    let plans = load_plans(&path)?;
    println!("Loaded {} plans in {:?}", plans.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    let runner = ScenarioRunner::new();

    // Run projections in parallel, keeping row order for the report
    let outcomes: Vec<(usize, SipResult<PlanProjection>)> = plans
        .par_iter()
        .enumerate()
        .map(|(index, plan)| (index, runner.run(plan)))
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(OUTPUT_PATH)
        .with_context(|| format!("failed to create output file {OUTPUT_PATH}"))?;

    writeln!(
        file,
        "Row,Mode,Years,AnnualReturnPct,TotalInvested,TotalReturns,TotalValue,InflationAdjusted,WealthMultiple,RequiredMonthly"
    )?;

    let mut skipped = 0;
    for (index, outcome) in &outcomes {
        match outcome {
            Ok(projection) => {
                let result = &projection.result;
                writeln!(
                    file,
                    "{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.4},{}",
                    index + 1,
                    projection.plan.mode_name(),
                    projection.plan.years(),
                    projection.plan.annual_return_pct(),
                    result.total_invested,
                    result.total_returns,
                    result.total_value,
                    result.inflation_adjusted_value,
                    result.wealth_multiple,
                    result
                        .required_monthly_contribution
                        .map(|r| format!("{r:.2}"))
                        .unwrap_or_default(),
                )?;
            }
            Err(e) => {
                skipped += 1;
                log::warn!("plan at row {} skipped: {}", index + 1, e);
            }
        }
    }

    println!(
        "Results written to {OUTPUT_PATH} at {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    // Block-level summary across the plans that projected cleanly
    let projected: Vec<&PlanProjection> = outcomes
        .iter()
        .filter_map(|(_, outcome)| outcome.as_ref().ok())
        .collect();
    let combined_invested: f64 = projected.iter().map(|p| p.result.total_invested).sum();
    let combined_value: f64 = projected.iter().map(|p| p.result.total_value).sum();

    println!("\nBatch Summary:");
    println!("  Plans projected: {} ({} skipped)", projected.len(), skipped);
    println!("  Combined invested: {}", format_currency(combined_invested));
    println!("  Combined projected value: {}", format_currency(combined_value));

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
