//! Display formatting for projection figures
//!
//! Currency renders as a rupee symbol plus Indian-system digit grouping:
//! the last three digits stand alone and every group above them is a pair,
//! matching `toLocaleString('en-IN')`. Amounts are rounded to whole units
//! with halves going away from zero.

use crate::projection::ProjectionResult;
use serde::Serialize;

/// Symbol prefixed to every formatted amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format a currency amount: whole units, symbol-prefixed, grouped
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let grouped = group_indian(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("{CURRENCY_SYMBOL}-{grouped}")
    } else {
        format!("{CURRENCY_SYMBOL}{grouped}")
    }
}

/// Format the wealth multiple as a two-decimal ratio
pub fn format_multiple(multiple: f64) -> String {
    format!("{multiple:.2}x")
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    if len <= 3 {
        return digits;
    }

    // last three digits stay together, the rest splits into pairs
    let (head, tail) = digits.split_at(len - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Display-ready rendering of every projection figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResult {
    pub total_invested: String,
    pub total_returns: String,
    pub total_value: String,
    pub inflation_adjusted_value: String,
    pub wealth_multiple: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_monthly_contribution: Option<String>,
}

impl FormattedResult {
    /// Format the settled values of a projection
    pub fn from_result(result: &ProjectionResult) -> Self {
        Self::from_fields(
            result.total_invested,
            result.total_returns,
            result.total_value,
            result.inflation_adjusted_value,
            result.wealth_multiple,
            result.required_monthly_contribution,
        )
    }

    /// Format an arbitrary set of figure values (used mid-animation)
    pub fn from_fields(
        invested: f64,
        returns: f64,
        value: f64,
        inflation_adjusted: f64,
        multiple: f64,
        required: Option<f64>,
    ) -> Self {
        Self {
            total_invested: format_currency(invested),
            total_returns: format_currency(returns),
            total_value: format_currency(value),
            inflation_adjusted_value: format_currency(inflation_adjusted),
            wealth_multiple: format_multiple(multiple),
            required_monthly_contribution: required.map(format_currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(123.0), "₹123");
        assert_eq!(format_currency(999.0), "₹999");
    }

    #[test]
    fn test_indian_grouping_boundaries() {
        assert_eq!(format_currency(1234.0), "₹1,234");
        assert_eq!(format_currency(12345.0), "₹12,345");
        assert_eq!(format_currency(99999.0), "₹99,999");
        assert_eq!(format_currency(100_000.0), "₹1,00,000");
        assert_eq!(format_currency(600_000.0), "₹6,00,000");
        assert_eq!(format_currency(1_161_695.0), "₹11,61,695");
        assert_eq!(format_currency(10_000_000.0), "₹1,00,00,000");
        assert_eq!(format_currency(123_456_789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_rounding_goes_half_away_from_zero() {
        assert_eq!(format_currency(2.5), "₹3");
        assert_eq!(format_currency(2.4), "₹2");
        assert_eq!(format_currency(-2.5), "₹-3");
    }

    #[test]
    fn test_negative_amounts_keep_the_symbol_first() {
        assert_eq!(format_currency(-123_456.0), "₹-1,23,456");
    }

    #[test]
    fn test_format_multiple() {
        assert_eq!(format_multiple(1.936159), "1.94x");
        assert_eq!(format_multiple(1.0), "1.00x");
    }

    #[test]
    fn test_formatted_result_mirrors_the_projection() {
        let result = ProjectionResult {
            total_invested: 600_000.0,
            total_returns: 561_695.38,
            total_value: 1_161_695.38,
            inflation_adjusted_value: 808_266.0,
            wealth_multiple: 1.936159,
            required_monthly_contribution: None,
        };
        let formatted = FormattedResult::from_result(&result);
        assert_eq!(formatted.total_invested, "₹6,00,000");
        assert_eq!(formatted.total_value, "₹11,61,695");
        assert_eq!(formatted.wealth_multiple, "1.94x");
        assert!(formatted.required_monthly_contribution.is_none());

        let json = serde_json::to_string(&formatted).unwrap();
        assert!(!json.contains("required_monthly_contribution"));
    }
}
