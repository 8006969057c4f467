use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::rounding::is_whole_cents;
use crate::AmortizationResult;

/// Longest supported loan term: one hundred years of monthly payments.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.03 = 3%). Never as percentages.
pub type Rate = Decimal;

/// Parameters of a fixed-rate installment loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate: Rate, term_months: u32) -> AmortizationResult<Self> {
        let terms = Self {
            principal,
            annual_rate,
            term_months,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Checks term, then rate, then principal; the first violation wins.
    pub fn validate(&self) -> AmortizationResult<()> {
        validate_terms(self.principal, self.annual_rate, self.term_months)
    }

    pub fn monthly_rate(&self) -> Rate {
        monthly_rate(self.annual_rate)
    }
}

pub(crate) fn validate_terms(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> AmortizationResult<()> {
    if term_months == 0 || term_months > MAX_TERM_MONTHS {
        return Err(AmortizationError::InvalidTerm { term_months });
    }
    if annual_rate < Decimal::ZERO {
        return Err(AmortizationError::InvalidRate { annual_rate });
    }
    if principal <= Decimal::ZERO {
        return Err(AmortizationError::InvalidPrincipal { principal });
    }
    if !is_whole_cents(principal) {
        return Err(AmortizationError::PrincipalNotWholeCents { principal });
    }
    Ok(())
}

pub(crate) fn monthly_rate(annual_rate: Rate) -> Rate {
    annual_rate / Decimal::from(12)
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub monthly_payment: Money,
    pub interest_accrued: Money,
    pub principal_portion: Money,
    pub remaining_balance: Money,
}

/// Schedule row as exposed to loan holders: no interest/principal split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicScheduleRow {
    pub month: u32,
    pub monthly_payment: Money,
    pub remaining_balance: Money,
}

impl From<&ScheduleRow> for PublicScheduleRow {
    fn from(row: &ScheduleRow) -> Self {
        Self {
            month: row.month,
            monthly_payment: row.monthly_payment,
            remaining_balance: row.remaining_balance,
        }
    }
}

/// Point-in-time aggregates after a given month's payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: u32,
    pub remaining_balance: Money,
    pub aggregate_principal_paid: Money,
    pub aggregate_interest_paid: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
