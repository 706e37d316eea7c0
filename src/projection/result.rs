//! Projection output record shared by the three calculators

use serde::{Deserialize, Serialize};

/// Outcome of projecting one plan to the end of its horizon
///
/// `total_value` always equals `total_invested + total_returns`. The meaning
/// of `inflation_adjusted_value` is mode-specific: the real-terms outcome for
/// basic plans, the nominal outcome for step-up plans (which do not deflate),
/// and the original target for goal plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Principal contributed over the full horizon
    pub total_invested: f64,
    /// Growth earned on top of the principal
    pub total_returns: f64,
    /// Projected value at the end of the horizon
    pub total_value: f64,
    /// Real-terms counterpart of the outcome
    pub inflation_adjusted_value: f64,
    /// total_value divided by total_invested
    pub wealth_multiple: f64,
    /// Contribution needed to reach the target (goal plans only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_monthly_contribution: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_contribution_is_omitted_when_absent() {
        let result = ProjectionResult {
            total_invested: 600_000.0,
            total_returns: 561_695.38,
            total_value: 1_161_695.38,
            inflation_adjusted_value: 820_000.0,
            wealth_multiple: 1.94,
            required_monthly_contribution: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("required_monthly_contribution"));

        let parsed: ProjectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
