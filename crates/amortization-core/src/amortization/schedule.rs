use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::payment::compute_payment;
use crate::rounding::{round_half_up, zero_money};
use crate::types::{monthly_rate, with_metadata, ComputationOutput, LoanTerms, Money, Rate, ScheduleRow};
use crate::AmortizationResult;

/// Full schedule plus lifetime totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub schedule: Vec<ScheduleRow>,
    pub regular_payment: Money,
    pub final_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
}

/// Month-by-month ledger for a fixed-rate loan.
///
/// The level payment is rounded to cents once and reused for every month;
/// each month's interest is rounded before it is split off. Whatever balance
/// is left after the last month (positive or negative) is folded into the
/// final payment so the ledger closes at exactly zero. Every amount in the
/// returned rows carries two decimal places.
pub fn build_schedule(principal: Money, annual_rate: Rate, term_months: u32) -> AmortizationResult<Vec<ScheduleRow>> {
    let payment = round_half_up(compute_payment(principal, annual_rate, term_months)?);
    let i = monthly_rate(annual_rate);

    let mut schedule: Vec<ScheduleRow> = Vec::with_capacity(term_months as usize);
    let mut balance = round_half_up(principal);

    for month in 1..=term_months {
        let interest_accrued = round_half_up(balance * i);
        let principal_portion = payment - interest_accrued;
        balance -= principal_portion;

        schedule.push(ScheduleRow {
            month,
            monthly_payment: payment,
            interest_accrued,
            principal_portion,
            remaining_balance: balance,
        });
    }

    reconcile_final_payment(&mut schedule);

    debug!(
        %principal,
        %annual_rate,
        term_months,
        %payment,
        "built amortization schedule"
    );

    Ok(schedule)
}

fn reconcile_final_payment(schedule: &mut [ScheduleRow]) {
    let Some(last) = schedule.last_mut() else {
        return;
    };

    let residue = last.remaining_balance;
    if residue.is_zero() {
        return;
    }

    debug!(month = last.month, %residue, "folding rounding residue into final payment");
    last.monthly_payment += residue;
    last.principal_portion += residue;
    last.remaining_balance = zero_money();
}

/// Schedule wrapped in the standard computation envelope.
pub fn calculate_schedule(terms: &LoanTerms) -> AmortizationResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();

    let schedule = build_schedule(terms.principal, terms.annual_rate, terms.term_months)?;

    // term_months >= 1 is guaranteed once build_schedule succeeds.
    let regular_payment = schedule[0].monthly_payment;
    let final_payment = schedule[schedule.len() - 1].monthly_payment;
    let total_paid: Money = schedule.iter().map(|r| r.monthly_payment).sum();
    let total_interest: Money = schedule.iter().map(|r| r.interest_accrued).sum();

    let mut warnings = Vec::new();
    if schedule.len() > 1 && final_payment != regular_payment {
        warnings.push(format!(
            "Final payment {} differs from regular payment {} by {} after rounding reconciliation",
            final_payment,
            regular_payment,
            final_payment - regular_payment
        ));
    }
    if schedule.iter().any(|r| r.remaining_balance < Decimal::ZERO) {
        warnings.push(
            "Rounded payment overshoots the principal before maturity; balance goes negative".into(),
        );
    }

    let output = ScheduleOutput {
        schedule,
        regular_payment,
        final_payment,
        total_paid,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level payment amortization, round-half-up to cents, final payment reconciled to zero balance",
        terms,
        warnings,
        elapsed,
        output,
    ))
}
