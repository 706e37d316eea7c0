//! Per-year chart series derived from a projection

use crate::error::{SipError, SipResult};
use crate::projection::result::ProjectionResult;
use serde::{Deserialize, Serialize};

/// One charted point: cumulative invested and value at a year mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Axis label, "Year 0" through "Year N"
    pub label: String,
    /// Cumulative amount invested by this year
    pub invested: f64,
    /// Cumulative projected value by this year
    pub value: f64,
}

/// Ordered year-by-year series from zero up to the projected totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySeries {
    points: Vec<SeriesPoint>,
}

impl YearlySeries {
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis labels in order
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    /// Cumulative invested amounts in order
    pub fn invested(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.invested).collect()
    }

    /// Cumulative projected values in order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Expand a projection into `years + 1` evenly spaced points
///
/// The ramp is a straight line to each of the final totals rather than the
/// true compounding curve: the chart reads as "share of the outcome reached
/// by year N", and both series hit their totals exactly at the last point.
pub fn generate_series(result: &ProjectionResult, years: u32) -> SipResult<YearlySeries> {
    if years == 0 {
        return Err(SipError::invalid("years", "series needs at least one year"));
    }

    let mut points = Vec::with_capacity(years as usize + 1);
    for year in 0..=years {
        let fraction = f64::from(year) / f64::from(years);
        points.push(SeriesPoint {
            label: format!("Year {year}"),
            invested: result.total_invested * fraction,
            value: result.total_value * fraction,
        });
    }

    Ok(YearlySeries { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ProjectionResult {
        ProjectionResult {
            total_invested: 600_000.0,
            total_returns: 561_695.38,
            total_value: 1_161_695.38,
            inflation_adjusted_value: 808_000.0,
            wealth_multiple: 1.94,
            required_monthly_contribution: None,
        }
    }

    #[test]
    fn test_series_has_one_point_per_year_plus_origin() {
        let series = generate_series(&sample_result(), 10).unwrap();
        assert_eq!(series.len(), 11);
        assert_eq!(series.points()[0].label, "Year 0");
        assert_eq!(series.points()[10].label, "Year 10");
    }

    #[test]
    fn test_series_starts_at_zero_and_ends_at_totals() {
        let result = sample_result();
        let series = generate_series(&result, 10).unwrap();

        let first = &series.points()[0];
        assert!(first.invested.abs() < 1e-12);
        assert!(first.value.abs() < 1e-12);

        let last = &series.points()[10];
        assert!((last.invested - result.total_invested).abs() < 1e-9);
        assert!((last.value - result.total_value).abs() < 1e-9);
    }

    #[test]
    fn test_series_is_monotone_for_positive_totals() {
        let series = generate_series(&sample_result(), 10).unwrap();
        for pair in series.points().windows(2) {
            assert!(pair[1].invested >= pair[0].invested);
            assert!(pair[1].value >= pair[0].value);
        }
    }

    #[test]
    fn test_series_interpolates_linearly() {
        let result = sample_result();
        let series = generate_series(&result, 10).unwrap();

        // year 5 of 10 sits exactly halfway up both ramps
        let mid = &series.points()[5];
        assert!((mid.invested - result.total_invested / 2.0).abs() < 1e-9);
        assert!((mid.value - result.total_value / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_year_series_is_rejected() {
        let err = generate_series(&sample_result(), 0).unwrap_err();
        assert_eq!(err.field(), Some("years"));
    }

    #[test]
    fn test_column_accessors_stay_aligned() {
        let series = generate_series(&sample_result(), 3).unwrap();
        assert_eq!(series.labels().len(), 4);
        assert_eq!(series.invested().len(), 4);
        assert_eq!(series.values().len(), 4);
        assert_eq!(series.labels()[2], "Year 2");
    }
}
