mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::budget::BudgetArgs;
use commands::debt::PayoffArgs;
use commands::eval::EvalArgs;
use commands::fx::ConvertArgs;
use commands::growth::{CompoundArgs, InflationArgs, InvestmentArgs, SavingsArgs};
use commands::loans::{AutoLoanArgs, LoanArgs, MortgageArgs, StudentLoanArgs};
use commands::ratios::{BreakEvenArgs, DtiArgs, RoiArgs};
use commands::tax::TaxArgs;

/// Everyday personal-finance calculations
#[derive(Parser)]
#[command(
    name = "mtc",
    version,
    about = "Everyday personal-finance calculations",
    long_about = "A CLI for loan, savings, investment, debt, tax and currency \
                  calculations with decimal precision. Every calculator reads \
                  flags, a JSON file (--input) or JSON piped on stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// JSON or YAML file with tax_brackets and/or currency_rates tables
    #[arg(long, env = "MONEY_TOOLS_TABLES", global = true)]
    tables: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment and totals of a fixed-rate loan
    Loan(LoanArgs),
    /// Auto loan including trade-in, down payment and fees
    AutoLoan(AutoLoanArgs),
    /// Mortgage payment with property tax and insurance
    Mortgage(MortgageArgs),
    /// Student loan with a grace period
    StudentLoan(StudentLoanArgs),
    /// Months of deposits needed to reach a savings goal
    Savings(SavingsArgs),
    /// Project an investment with monthly contributions
    Investment(InvestmentArgs),
    /// Periodic compound interest
    Compound(CompoundArgs),
    /// Purchasing power lost to inflation
    Inflation(InflationArgs),
    /// Return on investment
    Roi(RoiArgs),
    /// Debt-to-income ratio
    Dti(DtiArgs),
    /// Months to pay off a credit card balance
    Payoff(PayoffArgs),
    /// Progressive salary tax estimate
    Tax(TaxArgs),
    /// Convert between currencies
    Convert(ConvertArgs),
    /// Summarize a monthly budget
    Budget(BudgetArgs),
    /// Units needed to break even
    BreakEven(BreakEvenArgs),
    /// Evaluate a tagged JSON request ({"calculator": "loan", ...})
    Eval(EvalArgs),
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

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout carries results; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let library = match config::load_library(cli.tables.as_deref()) {
        Ok(library) => library,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Loan(args) => commands::loans::run_loan(args, &library),
        Commands::AutoLoan(args) => commands::loans::run_auto_loan(args, &library),
        Commands::Mortgage(args) => commands::loans::run_mortgage(args, &library),
        Commands::StudentLoan(args) => commands::loans::run_student_loan(args, &library),
        Commands::Savings(args) => commands::growth::run_savings(args, &library),
        Commands::Investment(args) => commands::growth::run_investment(args, &library),
        Commands::Compound(args) => commands::growth::run_compound(args, &library),
        Commands::Inflation(args) => commands::growth::run_inflation(args, &library),
        Commands::Roi(args) => commands::ratios::run_roi(args, &library),
        Commands::Dti(args) => commands::ratios::run_dti(args, &library),
        Commands::Payoff(args) => commands::debt::run_payoff(args, &library),
        Commands::Tax(args) => commands::tax::run_tax(args, &library),
        Commands::Convert(args) => commands::fx::run_convert(args, &library),
        Commands::Budget(args) => commands::budget::run_budget(args, &library),
        Commands::BreakEven(args) => commands::ratios::run_break_even(args, &library),
        Commands::Eval(args) => commands::eval::run_eval(args, &library),
        Commands::Version => {
            println!("mtc {}", env!("CARGO_PKG_VERSION"));
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
