//! AWS Lambda handler for SIP projections
//!
//! Accepts a mode-tagged plan via JSON and returns the raw projection, the
//! display-formatted figures, and the chart payload in one response.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::{DateTime, Utc};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use sip_calculator::display::{ChartSeries, FormattedResult};
use sip_calculator::{ProjectionResult, ScenarioRunner, SipError, SipPlan};

/// Input: the plan itself plus optional sweep rates
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    /// The plan to project, tagged by `mode`
    #[serde(flatten)]
    pub plan: SipPlan,

    /// Extra annual return rates to project alongside the plan's own
    #[serde(default)]
    pub sweep_return_pcts: Vec<f64>,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub mode: &'static str,
    pub result: ProjectionResult,
    pub formatted: FormattedResult,
    pub chart: ChartSeries,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sweep: Vec<SweepEntry>,
    pub generated_at: DateTime<Utc>,
    pub execution_time_ms: u64,
}

/// One rate-sweep outcome
#[derive(Debug, Serialize)]
pub struct SweepEntry {
    pub annual_return_pct: f64,
    pub result: ProjectionResult,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = ErrorBody {
        error: message.to_string(),
        field: None,
    };
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Calculation failures are client errors: the body names the offending
/// field so the caller can highlight it
fn calculation_error_response(error: &SipError) -> Response<Body> {
    let body = ErrorBody {
        error: error.to_string(),
        field: error.field(),
    };
    Response::builder()
        .status(400)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn json_response(body: &ProjectionResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let runner = ScenarioRunner::new();

    let outcome = match runner.run(&request.plan) {
        Ok(o) => o,
        Err(e) => {
            return Ok(calculation_error_response(&e));
        }
    };

    let sweep = if request.sweep_return_pcts.is_empty() {
        Vec::new()
    } else {
        match runner.run_rate_sweep(&request.plan, &request.sweep_return_pcts) {
            Ok(projections) => projections
                .into_iter()
                .zip(request.sweep_return_pcts.iter())
                .map(|(p, &pct)| SweepEntry {
                    annual_return_pct: pct,
                    result: p.result,
                })
                .collect(),
            Err(e) => {
                return Ok(calculation_error_response(&e));
            }
        }
    };

    let response = ProjectionResponse {
        mode: outcome.plan.mode_name(),
        formatted: FormattedResult::from_result(&outcome.result),
        chart: ChartSeries::from(&outcome.series),
        result: outcome.result,
        sweep,
        generated_at: Utc::now(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
