//! Chart-ready breakdown of an EMI result.
//!
//! The core generates the data points; the presentation layer just renders
//! them as a three-bar chart in the fixed order Principal, Interest, Total.

use serde::{Deserialize, Serialize};

use crate::emi::engine::EmiResult;
use crate::types::Money;

/// Bar colors, cycled by index.
const PALETTE: [&str; 3] = ["#3f3f46", "#6366f1", "#eab308"];

/// A single bar for the breakdown chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownPoint {
    pub label: String,
    pub value: Money,
    /// Hex fill color assigned from the fixed palette by bar position.
    pub color: String,
}

/// Build the three-bar breakdown series from a computed EMI result.
///
/// Order is significant: it determines bar position and color assignment.
pub fn breakdown_series(result: &EmiResult) -> Vec<BreakdownPoint> {
    let bars = [
        ("Principal", result.principal),
        ("Interest", result.total_interest),
        ("Total", result.total_payment),
    ];

    bars.iter()
        .enumerate()
        .map(|(idx, (label, value))| BreakdownPoint {
            label: (*label).to_string(),
            value: *value,
            color: PALETTE[idx % PALETTE.len()].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emi::engine::{calculate_emi, LoanInputs};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn sample_result() -> EmiResult {
        calculate_emi(&LoanInputs {
            principal: dec!(500_000),
            annual_rate_percent: dec!(8.5),
            tenure_years: dec!(5),
        })
        .unwrap()
        .result
    }

    #[test]
    fn test_fixed_order_and_values() {
        let result = sample_result();
        let series = breakdown_series(&result);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].label, "Principal");
        assert_eq!(series[0].value, result.principal);
        assert_eq!(series[1].label, "Interest");
        assert_eq!(series[1].value, result.total_interest);
        assert_eq!(series[2].label, "Total");
        assert_eq!(series[2].value, result.total_payment);
    }

    #[test]
    fn test_palette_assignment() {
        let series = breakdown_series(&sample_result());
        assert_eq!(series[0].color, "#3f3f46");
        assert_eq!(series[1].color, "#6366f1");
        assert_eq!(series[2].color, "#eab308");
    }

    #[test]
    fn test_series_shares_result_rounding() {
        // Bars carry the already-rounded figures, never re-rounded copies.
        let result = sample_result();
        let series = breakdown_series(&result);
        let total = series
            .iter()
            .find(|p| p.label == "Total")
            .map(|p| p.value)
            .unwrap();
        assert_eq!(total, result.total_payment);
    }
}
