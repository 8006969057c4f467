use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use amortization_core::amortization::{self, SummaryInput};
use amortization_core::LoanTerms;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_terms(input_json: &str) -> NapiResult<LoanTerms> {
    let terms: LoanTerms = serde_json::from_str(input_json).map_err(to_napi_error)?;
    terms.validate().map_err(to_napi_error)?;
    Ok(terms)
}

/// Unrounded level payment plus its cent-rounded form.
#[napi]
pub fn compute_payment(input_json: String) -> NapiResult<String> {
    let terms = parse_terms(&input_json)?;
    let output = amortization::calculate_payment(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let terms = parse_terms(&input_json)?;
    let output = amortization::calculate_schedule(&terms).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct SummaryRequest {
    principal: Decimal,
    annual_rate: Decimal,
    term_months: u32,
    month: i64,
}

/// `month` is taken as a signed integer so request layers get the
/// "not positive" and "exceeds term" failures distinctly.
#[napi]
pub fn project_summary(input_json: String) -> NapiResult<String> {
    let req: SummaryRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let terms = LoanTerms::new(req.principal, req.annual_rate, req.term_months).map_err(to_napi_error)?;
    let month = amortization::validate_month(req.month, terms.term_months).map_err(to_napi_error)?;
    let output = amortization::calculate_summary(&SummaryInput { terms, month }).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
