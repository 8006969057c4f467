use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::schedule::build_schedule;
use crate::error::AmortizationError;
use crate::rounding::round_half_up;
use crate::types::{validate_terms, with_metadata, ComputationOutput, LoanTerms, Money, MonthlySummary, Rate};
use crate::AmortizationResult;

/// Input for a single-month summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryInput {
    #[serde(flatten)]
    pub terms: LoanTerms,
    pub month: u32,
}

/// Check a requested month against the loan term.
///
/// `month` is signed so that raw request values can be rejected as
/// "not positive" separately from "exceeds term".
pub fn validate_month(month: i64, term_months: u32) -> AmortizationResult<u32> {
    if month <= 0 {
        return Err(AmortizationError::MonthNotPositive { month });
    }
    if month > i64::from(term_months) {
        return Err(AmortizationError::MonthExceedsTerm { month, term_months });
    }
    // Bounded by term_months above.
    Ok(month as u32)
}

/// Balance and cumulative principal/interest after `month` payments.
pub fn project_summary(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
    month: u32,
) -> AmortizationResult<MonthlySummary> {
    validate_terms(principal, annual_rate, term_months)?;
    validate_month(i64::from(month), term_months)?;

    let schedule = build_schedule(principal, annual_rate, term_months)?;
    let through = &schedule[..month as usize];

    let remaining_balance = through[through.len() - 1].remaining_balance;
    let aggregate_interest_paid: Money = through.iter().map(|r| r.interest_accrued).sum();

    Ok(MonthlySummary {
        month,
        remaining_balance,
        aggregate_principal_paid: round_half_up(principal) - remaining_balance,
        aggregate_interest_paid,
    })
}

/// Summary wrapped in the standard computation envelope.
pub fn calculate_summary(input: &SummaryInput) -> AmortizationResult<ComputationOutput<MonthlySummary>> {
    let start = Instant::now();

    let terms = &input.terms;
    let summary = project_summary(terms.principal, terms.annual_rate, terms.term_months, input.month)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Cumulative position after the requested month of the rounded amortization schedule",
        input,
        Vec::new(),
        elapsed,
        summary,
    ))
}
