use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmortizationError {
    #[error("Invalid principal: {principal} — principal must be greater than zero")]
    InvalidPrincipal { principal: Decimal },

    #[error("Invalid principal: {principal} — principal cannot include fractions of a cent")]
    PrincipalNotWholeCents { principal: Decimal },

    #[error("Invalid rate: {annual_rate} — annual interest rate cannot be negative")]
    InvalidRate { annual_rate: Decimal },

    #[error(
        "Invalid term: {term_months} — loan term must be between 1 and {max} months",
        max = crate::types::MAX_TERM_MONTHS
    )]
    InvalidTerm { term_months: u32 },

    #[error("Invalid month: {month} — month number must be positive")]
    MonthNotPositive { month: i64 },

    #[error("Invalid month: {month} — month number exceeds loan term of {term_months} months")]
    MonthExceedsTerm { month: i64, term_months: u32 },

    #[error("Arithmetic overflow in {context}")]
    ArithmeticOverflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AmortizationError {
    /// True for the month validation failures owned by the request layer.
    pub fn is_month_error(&self) -> bool {
        matches!(
            self,
            AmortizationError::MonthNotPositive { .. } | AmortizationError::MonthExceedsTerm { .. }
        )
    }
}

impl From<serde_json::Error> for AmortizationError {
    fn from(e: serde_json::Error) -> Self {
        AmortizationError::SerializationError(e.to_string())
    }
}
