pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Single currency symbol used for monetary display.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Fields that carry monetary values and get the currency prefix.
pub const MONEY_FIELDS: [&str; 5] = [
    "monthly_installment",
    "total_interest",
    "total_payment",
    "principal",
    "value",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}
