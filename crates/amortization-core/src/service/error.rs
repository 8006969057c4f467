use thiserror::Error;

use super::models::LoanId;
use crate::error::AmortizationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("Inactive user")]
    InactiveUser,

    #[error("The user doesn't have enough privileges")]
    Forbidden,

    /// Also returned when the loan exists but the caller may not read it.
    #[error("Loan not found: {loan_id}")]
    LoanNotFound { loan_id: LoanId },

    #[error("The user with email {email} already exists in the system")]
    EmailAlreadyRegistered { email: String },

    #[error("Invalid page limit: {limit} — must be between 1 and {max}")]
    InvalidPageLimit { limit: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Loan store unavailable: {0}")]
    StoreUnavailable(String),

    #[error(transparent)]
    Engine(#[from] AmortizationError),
}

impl ServiceError {
    /// Whether the failure is the caller's fault (bad input, missing access)
    /// rather than the service's.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            ServiceError::InvalidConfig(_)
                | ServiceError::StoreUnavailable(_)
                | ServiceError::Engine(AmortizationError::ArithmeticOverflow { .. })
                | ServiceError::Engine(AmortizationError::SerializationError(_))
        )
    }
}
