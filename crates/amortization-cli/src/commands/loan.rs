use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use amortization_core::amortization::{self, SummaryInput};
use amortization_core::{LoanTerms, PublicScheduleRow};

use crate::input;

/// Loan parameters shared by every command
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a decimal (0.03 = 3%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan term in months
    #[arg(long, alias = "term")]
    pub term_months: Option<u32>,
}

/// Arguments for the monthly payment calculation
#[derive(Args)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Only show month, payment and remaining balance
    #[arg(long)]
    pub public: bool,
}

/// Arguments for a single-month summary
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Month number (1-based); overrides "month" in the JSON input
    #[arg(long, allow_hyphen_values = true)]
    pub month: Option<i64>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = read_terms(&args.loan)?;
    let result = amortization::calculate_payment(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = read_terms(&args.loan)?;
    let result = amortization::calculate_schedule(&terms)?;
    let mut value = serde_json::to_value(&result)?;

    if args.public {
        let rows: Vec<PublicScheduleRow> = result
            .result
            .schedule
            .iter()
            .map(PublicScheduleRow::from)
            .collect();
        value["result"]["schedule"] = serde_json::to_value(rows)?;
    }

    Ok(value)
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (terms, file_month) = if let Some(ref path) = args.loan.input {
        let raw: Value = input::file::read_json_value(path)?;
        split_summary_input(raw)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        split_summary_input(data)?
    } else {
        (terms_from_flags(&args.loan)?, None)
    };

    let month = args
        .month
        .or(file_month)
        .ok_or("--month is required (or provide \"month\" in --input)")?;
    let month = amortization::validate_month(month, terms.term_months)?;

    let result = amortization::calculate_summary(&SummaryInput { terms, month })?;
    Ok(serde_json::to_value(result)?)
}

fn read_terms(args: &LoanArgs) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        terms_from_flags(args)?
    };
    terms.validate()?;
    debug!(?terms, "resolved loan terms");
    Ok(terms)
}

fn terms_from_flags(args: &LoanArgs) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    let terms = LoanTerms {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate: args
            .annual_rate
            .ok_or("--annual-rate is required (or provide --input)")?,
        term_months: args
            .term_months
            .ok_or("--term-months is required (or provide --input)")?,
    };
    terms.validate()?;
    Ok(terms)
}

/// Summary JSON is loan terms plus an optional "month".
fn split_summary_input(mut raw: Value) -> Result<(LoanTerms, Option<i64>), Box<dyn std::error::Error>> {
    let month = match raw.as_object_mut().and_then(|m| m.remove("month")) {
        Some(v) => Some(v.as_i64().ok_or("\"month\" must be an integer")?),
        None => None,
    };
    let terms: LoanTerms = serde_json::from_value(raw)?;
    terms.validate()?;
    Ok((terms, month))
}

