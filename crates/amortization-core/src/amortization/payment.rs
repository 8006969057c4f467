use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::AmortizationError;
use crate::rounding::round_half_up;
use crate::types::{monthly_rate, validate_terms, with_metadata, ComputationOutput, LoanTerms, Money, Rate};
use crate::AmortizationResult;

/// Output of the payment calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOutput {
    /// Full-precision level payment, before any rounding.
    pub monthly_payment: Money,
    /// The payment every schedule row but the last one carries.
    pub rounded_payment: Money,
    pub monthly_rate: Rate,
}

/// Level monthly payment that retires `principal` over `term_months` at
/// `annual_rate / 12` per month. The result is not rounded.
pub fn compute_payment(principal: Money, annual_rate: Rate, term_months: u32) -> AmortizationResult<Money> {
    validate_terms(principal, annual_rate, term_months)?;

    let i = monthly_rate(annual_rate);
    let n = Decimal::from(term_months);

    if i.is_zero() {
        return Ok(principal / n);
    }

    // A = P * (i + i / ((1 + i)^n - 1))
    let growth = (Decimal::ONE + i)
        .checked_powi(i64::from(term_months))
        .ok_or_else(|| overflow("payment growth factor (1 + i)^n"))?;
    let annuity_denominator = growth - Decimal::ONE;

    // Rates too small to move (1 + i)^n off one at 28 digits behave like zero.
    if annuity_denominator.is_zero() {
        return Ok(principal / n);
    }

    let factor = i
        .checked_div(annuity_denominator)
        .and_then(|q| q.checked_add(i))
        .ok_or_else(|| overflow("payment annuity factor"))?;

    principal
        .checked_mul(factor)
        .ok_or_else(|| overflow("monthly payment"))
}

/// Payment calculation wrapped in the standard computation envelope.
pub fn calculate_payment(terms: &LoanTerms) -> AmortizationResult<ComputationOutput<PaymentOutput>> {
    let start = Instant::now();

    let monthly_payment = compute_payment(terms.principal, terms.annual_rate, terms.term_months)?;
    let rounded_payment = round_half_up(monthly_payment);

    let mut warnings = Vec::new();
    if rounded_payment.is_zero() {
        warnings.push(format!(
            "Monthly payment {} rounds to zero; the final payment will retire the whole principal",
            monthly_payment
        ));
    }

    let output = PaymentOutput {
        monthly_payment,
        rounded_payment,
        monthly_rate: terms.monthly_rate(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level payment annuity formula: P * (i + i / ((1 + i)^n - 1)), straight-line when i = 0",
        terms,
        warnings,
        elapsed,
        output,
    ))
}

fn overflow(context: &str) -> AmortizationError {
    AmortizationError::ArithmeticOverflow {
        context: context.into(),
    }
}
