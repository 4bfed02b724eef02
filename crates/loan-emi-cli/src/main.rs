mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::emi::LoanArgs;

/// Loan EMI calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan EMI calculator",
    long_about = "Computes the equated monthly installment, total interest and total \
                  payment for an amortising loan with decimal precision, and emits a \
                  chart-ready Principal/Interest/Total breakdown series."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the monthly installment for a loan
    Calculate(LoanArgs),
    /// Emit the three-bar breakdown series for charting
    Breakdown(LoanArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::emi::run_calculate(args),
        Commands::Breakdown(args) => commands::emi::run_breakdown(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
