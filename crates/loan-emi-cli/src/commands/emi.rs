use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_emi_core::emi::breakdown;
use loan_emi_core::emi::engine::{self, LoanInputs};

use crate::input;

/// Loan parameters, shared by the calculate and breakdown subcommands.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long, alias = "amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (8.5 = 8.5% p.a.)
    #[arg(long, alias = "interest")]
    pub rate: Option<Decimal>,

    /// Tenure in years (fractional allowed)
    #[arg(long)]
    pub tenure: Option<Decimal>,
}

pub fn run_calculate(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_inputs(args)?;
    let result = engine::calculate_emi(&loan)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_breakdown(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = resolve_inputs(args)?;
    let result = engine::calculate_emi(&loan)?;
    let series = breakdown::breakdown_series(&result.result);
    Ok(serde_json::to_value(series)?)
}

/// Resolve loan inputs from, in priority order: an input file, piped stdin,
/// or the individual flags. Hyphen values pass through so that negative
/// figures reach the engine's validation instead of dying in the parser.
fn resolve_inputs(args: LoanArgs) -> Result<LoanInputs, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(loan) = input::stdin::read_stdin()? {
        return Ok(loan);
    }

    Ok(LoanInputs {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate_percent: args
            .rate
            .ok_or("--rate is required (or provide --input)")?,
        tenure_years: args
            .tenure
            .ok_or("--tenure is required (or provide --input)")?,
    })
}
