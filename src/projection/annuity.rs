//! Closed-form annuity math shared by the calculators
//!
//! Everything works on a periodic (monthly) rate. Contributions land at the
//! start of each period, so future values carry one extra period of growth
//! compared to an ordinary annuity.

use crate::error::{SipError, SipResult};

/// Rates closer to zero than this take the zero-rate limit of each formula
pub const RATE_EPSILON: f64 = 1e-10;

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / 12.0
}

/// Future value of an annuity-due: `payment` at the start of each of
/// `months` periods, compounding at `rate` per period
///
/// FV = P * ((1 + i)^m - 1) / i * (1 + i), with the limit P * m as i -> 0.
pub fn annuity_due_fv(payment: f64, months: f64, rate: f64) -> SipResult<f64> {
    guard_rate(rate)?;

    if rate.abs() < RATE_EPSILON {
        return Ok(payment * months);
    }

    let growth = (1.0 + rate).powf(months);
    Ok(payment * ((growth - 1.0) / rate) * (1.0 + rate))
}

/// Payment at the start of each of `months` periods that grows to `target`
/// at `rate` per period (the inverse of `annuity_due_fv`)
pub fn annuity_due_payment(target: f64, months: f64, rate: f64) -> SipResult<f64> {
    guard_rate(rate)?;

    if months <= 0.0 {
        return Err(SipError::invalid(
            "months",
            format!("must be positive, got {months}"),
        ));
    }

    if rate.abs() < RATE_EPSILON {
        return Ok(target / months);
    }

    let growth = (1.0 + rate).powf(months);
    Ok(target * rate / ((growth - 1.0) * (1.0 + rate)))
}

/// Monthly real rate per the Fisher relation, from annual percentages:
/// ((1 + r) / (1 + f) - 1) / 12
pub fn real_monthly_rate(annual_return_pct: f64, annual_inflation_pct: f64) -> SipResult<f64> {
    let inflation_factor = 1.0 + annual_inflation_pct / 100.0;
    if inflation_factor.abs() < RATE_EPSILON {
        return Err(SipError::DivisionByZero {
            context: "Fisher relation (inflation factor is zero)",
        });
    }

    let real_annual = (1.0 + annual_return_pct / 100.0) / inflation_factor - 1.0;
    Ok(real_annual / 12.0)
}

/// Ratio of final value to principal contributed
pub fn wealth_multiple(total_value: f64, total_invested: f64) -> SipResult<f64> {
    if total_invested == 0.0 {
        return Err(SipError::DivisionByZero {
            context: "wealth multiple (nothing invested)",
        });
    }
    Ok(total_value / total_invested)
}

/// A periodic rate of -1 collapses the growth factor to zero, which divides
/// by zero in the payment inversion; anything below -1 flips its sign every
/// period. Both are rejected before any formula runs.
fn guard_rate(rate: f64) -> SipResult<()> {
    if (rate + 1.0).abs() < RATE_EPSILON {
        return Err(SipError::DivisionByZero {
            context: "annuity growth formula (periodic rate is -1)",
        });
    }
    if rate < -1.0 {
        return Err(SipError::invalid(
            "rate",
            format!("periodic rate must stay above -1, got {rate}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate_conversion() {
        assert!((monthly_rate(12.0) - 0.01).abs() < 1e-12);
        assert!((monthly_rate(0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_annuity_due_fv_known_value() {
        // 5000/month for 120 months at 1% monthly
        let fv = annuity_due_fv(5000.0, 120.0, 0.01).unwrap();

        // Expected: 5000 * ((1.01^120 - 1) / 0.01) * 1.01 ≈ 1,161,695.38
        assert_relative_eq!(fv, 1_161_695.38, max_relative = 1e-6);
    }

    #[test]
    fn test_annuity_due_fv_zero_rate_limit() {
        let fv = annuity_due_fv(5000.0, 120.0, 0.0).unwrap();
        assert!((fv - 600_000.0).abs() < 1e-9);

        // rates inside the epsilon band take the same limit
        let fv_tiny = annuity_due_fv(5000.0, 120.0, 1e-12).unwrap();
        assert!((fv_tiny - 600_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_annuity_due_payment_inverts_fv() {
        let rate = 0.01;
        let months = 120.0;
        let payment = annuity_due_payment(1_000_000.0, months, rate).unwrap();
        let fv = annuity_due_fv(payment, months, rate).unwrap();
        assert_relative_eq!(fv, 1_000_000.0, max_relative = 1e-10);
    }

    #[test]
    fn test_annuity_due_payment_zero_rate_limit() {
        let payment = annuity_due_payment(600_000.0, 120.0, 0.0).unwrap();
        assert!((payment - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_of_minus_one_is_division_by_zero() {
        let err = annuity_due_fv(5000.0, 120.0, -1.0).unwrap_err();
        assert!(matches!(err, SipError::DivisionByZero { .. }));

        let err = annuity_due_payment(600_000.0, 120.0, -1.0).unwrap_err();
        assert!(matches!(err, SipError::DivisionByZero { .. }));
    }

    #[test]
    fn test_rate_below_minus_one_is_invalid() {
        let err = annuity_due_fv(5000.0, 120.0, -1.5).unwrap_err();
        assert!(matches!(err, SipError::InvalidParameter { .. }));
    }

    #[test]
    fn test_real_monthly_rate_fisher() {
        // 12% nominal against 6% inflation
        let real = real_monthly_rate(12.0, 6.0).unwrap();
        let expected = (1.12 / 1.06 - 1.0) / 12.0;
        assert_relative_eq!(real, expected, max_relative = 1e-12);

        // inflation above the return drives the real rate negative
        assert!(real_monthly_rate(4.0, 6.0).unwrap() < 0.0);
    }

    #[test]
    fn test_real_monthly_rate_rejects_zero_inflation_factor() {
        let err = real_monthly_rate(12.0, -100.0).unwrap_err();
        assert!(matches!(err, SipError::DivisionByZero { .. }));
    }

    #[test]
    fn test_wealth_multiple() {
        let multiple = wealth_multiple(1_161_695.38, 600_000.0).unwrap();
        assert_relative_eq!(multiple, 1.936159, max_relative = 1e-6);

        let err = wealth_multiple(1000.0, 0.0).unwrap_err();
        assert!(matches!(err, SipError::DivisionByZero { .. }));
    }
}
