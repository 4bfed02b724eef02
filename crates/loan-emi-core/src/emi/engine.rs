//! Reducing-balance EMI engine: level-pay installment, total interest and
//! total payment for an amortising loan. All math in `rust_decimal::Decimal`.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEmiError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, Years};
use crate::LoanEmiResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Display precision for all monetary outputs (cents/paise).
const DISPLAY_DP: u32 = 2;

/// Annual rate above which a warning is attached.
const HIGH_RATE_THRESHOLD: Decimal = dec!(30);

/// Tenure above which a warning is attached.
const LONG_TENURE_THRESHOLD: Decimal = dec!(50);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// The three user-supplied loan parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Loan amount in currency units.
    pub principal: Money,
    /// Nominal annual rate in percent (8.5 means 8.5% p.a.).
    pub annual_rate_percent: Rate,
    /// Repayment tenure in years. Fractional years are allowed.
    pub tenure_years: Years,
}

/// EMI computation output. All figures rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiResult {
    pub monthly_installment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    /// Input principal under the same rounding policy as the other figures.
    pub principal: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the equated monthly installment for a loan.
///
/// Uses the standard level-pay annuity formula
/// `P * i * (1 + i)^n / ((1 + i)^n - 1)` with `i` the monthly rate and `n`
/// the number of months. A zero rate takes the straight-line branch
/// `P / n` with zero total interest.
pub fn calculate_emi(input: &LoanInputs) -> LoanEmiResult<ComputationOutput<EmiResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    if input.annual_rate_percent > HIGH_RATE_THRESHOLD {
        warnings.push(format!(
            "Annual rate {}% is unusually high for an amortising loan.",
            input.annual_rate_percent
        ));
    }
    if input.tenure_years > LONG_TENURE_THRESHOLD {
        warnings.push(format!(
            "Tenure of {} years exceeds {} years.",
            input.tenure_years, LONG_TENURE_THRESHOLD
        ));
    }

    let months = input.tenure_years * MONTHS_PER_YEAR;
    let monthly_rate = input.annual_rate_percent / MONTHS_PER_YEAR / PERCENT;

    // Unrounded figures; rounding happens once at the output boundary.
    let (installment, total_interest, total_payment) = if monthly_rate.is_zero() {
        // Interest-free loan: the annuity formula degenerates to 0/0, so the
        // installment is straight-line principal over the term.
        let installment = input.principal / months;
        (installment, Decimal::ZERO, installment * months)
    } else {
        let installment = level_payment(input.principal, monthly_rate, months)?;
        let total_payment = installment * months;
        (installment, total_payment - input.principal, total_payment)
    };

    let output = EmiResult {
        monthly_installment: round_display(installment),
        total_interest: round_display(total_interest),
        total_payment: round_display(total_payment),
        principal: round_display(input.principal),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "compounding": "monthly, nominal annual rate / 12",
        "rounding": "2 dp, midpoint away from zero, output boundary only",
        "zero_rate": "straight-line principal / months",
        "fractional_tenure": "months = tenure_years * 12, fractional months allowed"
    });

    Ok(with_metadata(
        "Reducing-balance EMI (level-pay annuity)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &LoanInputs) -> LoanEmiResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(LoanEmiError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive.".into(),
        });
    }
    if input.tenure_years <= Decimal::ZERO {
        return Err(LoanEmiError::InvalidInput {
            field: "tenure_years".into(),
            reason: "Tenure must be positive.".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(LoanEmiError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Annual rate cannot be negative.".into(),
        });
    }
    Ok(())
}

/// Level payment for a positive monthly rate.
fn level_payment(principal: Money, monthly_rate: Rate, months: Decimal) -> LoanEmiResult<Money> {
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powd(months)
        .ok_or_else(|| LoanEmiError::NumericRange {
            context: "EMI growth factor (1 + i)^n".into(),
        })?;

    let denominator = growth - Decimal::ONE;
    if denominator <= Decimal::ZERO {
        // Rate below Decimal resolution; callers hit the zero-rate branch
        // before this in practice.
        return Err(LoanEmiError::DivisionByZero {
            context: "EMI annuity factor".into(),
        });
    }

    Ok(principal * monthly_rate * growth / denominator)
}

fn round_display(value: Money) -> Money {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn inputs(principal: Decimal, rate: Decimal, tenure: Decimal) -> LoanInputs {
        LoanInputs {
            principal,
            annual_rate_percent: rate,
            tenure_years: tenure,
        }
    }

    #[test]
    fn test_standard_loan() {
        // 500k at 8.5% over 5 years: EMI ~ 10258.31
        let result = calculate_emi(&inputs(dec!(500_000), dec!(8.5), dec!(5))).unwrap();
        let r = &result.result;

        assert!((r.monthly_installment - dec!(10258.31)).abs() <= dec!(0.01));
        assert!((r.total_payment - dec!(615_498.60)).abs() <= dec!(0.01));
        assert!((r.total_interest - dec!(115_498.60)).abs() <= dec!(0.01));
        assert_eq!(r.principal, dec!(500_000.00));
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        // 100k interest-free over 10 years = 120 equal installments
        let result = calculate_emi(&inputs(dec!(100_000), dec!(0), dec!(10))).unwrap();
        let r = &result.result;

        assert_eq!(r.monthly_installment, dec!(833.33));
        assert_eq!(r.total_interest, dec!(0.00));
        assert_eq!(r.total_payment, dec!(100_000.00));
    }

    #[test]
    fn test_payment_identity() {
        let result = calculate_emi(&inputs(dec!(750_000), dec!(9.25), dec!(20))).unwrap();
        let r = &result.result;
        let months = dec!(240);

        // total_payment == emi * n and total_interest == total - principal,
        // within half a cent of rounding slack per rounded figure
        let slack = dec!(0.005) * (months + Decimal::ONE);
        assert!((r.total_payment - r.monthly_installment * months).abs() <= slack);
        assert!((r.total_interest - (r.total_payment - r.principal)).abs() <= dec!(0.01));
    }

    #[test]
    fn test_deterministic() {
        let input = inputs(dec!(123_456.78), dec!(7.35), dec!(12.5));
        let a = calculate_emi(&input).unwrap();
        let b = calculate_emi(&input).unwrap();
        assert_eq!(a.result.monthly_installment, b.result.monthly_installment);
        assert_eq!(a.result.total_interest, b.result.total_interest);
        assert_eq!(a.result.total_payment, b.result.total_payment);
    }

    #[test]
    fn test_monotonic_in_principal() {
        let low = calculate_emi(&inputs(dec!(500_000), dec!(8.5), dec!(5))).unwrap();
        let high = calculate_emi(&inputs(dec!(600_000), dec!(8.5), dec!(5))).unwrap();
        assert!(high.result.monthly_installment > low.result.monthly_installment);
    }

    #[test]
    fn test_monotonic_in_rate() {
        let low = calculate_emi(&inputs(dec!(500_000), dec!(8.5), dec!(5))).unwrap();
        let high = calculate_emi(&inputs(dec!(500_000), dec!(10.5), dec!(5))).unwrap();
        assert!(high.result.total_interest > low.result.total_interest);
    }

    #[test]
    fn test_fractional_tenure() {
        // 2.5 years = 30 months
        let result = calculate_emi(&inputs(dec!(60_000), dec!(0), dec!(2.5))).unwrap();
        assert_eq!(result.result.monthly_installment, dec!(2000.00));
    }

    #[test]
    fn test_zero_principal_rejected() {
        let err = calculate_emi(&inputs(dec!(0), dec!(8.5), dec!(5))).unwrap_err();
        match err {
            LoanEmiError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_principal_rejected() {
        let err = calculate_emi(&inputs(dec!(-1000), dec!(5), dec!(5))).unwrap_err();
        match err {
            LoanEmiError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let err = calculate_emi(&inputs(dec!(500_000), dec!(8.5), dec!(0))).unwrap_err();
        match err {
            LoanEmiError::InvalidInput { field, .. } => assert_eq!(field, "tenure_years"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = calculate_emi(&inputs(dec!(500_000), dec!(-1), dec!(5))).unwrap_err();
        match err {
            LoanEmiError::InvalidInput { field, .. } => assert_eq!(field, "annual_rate_percent"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_large_loan_long_tenure() {
        // Upper end of the realistic envelope must compute cleanly.
        let result = calculate_emi(&inputs(dec!(1_000_000_000), dec!(30), dec!(50))).unwrap();
        let r = &result.result;
        assert!(r.monthly_installment > Decimal::ZERO);
        assert!(r.total_payment > r.principal);
    }

    #[test]
    fn test_high_rate_warning() {
        let result = calculate_emi(&inputs(dec!(100_000), dec!(36), dec!(3))).unwrap();
        assert!(result.warnings.iter().any(|w| w.contains("unusually high")));
    }

    #[test]
    fn test_metadata_populated() {
        let result = calculate_emi(&inputs(dec!(500_000), dec!(8.5), dec!(5))).unwrap();
        assert!(!result.methodology.is_empty());
        assert_eq!(result.metadata.precision, "rust_decimal_128bit");
    }
}
