pub mod amortization;
pub mod error;
pub mod rounding;
pub mod types;

#[cfg(feature = "service")]
pub mod service;

pub use amortization::{build_schedule, compute_payment, project_summary};
pub use error::AmortizationError;
pub use rounding::round_half_up;
pub use types::*;

/// Standard result type for all amortization operations
pub type AmortizationResult<T> = Result<T, AmortizationError>;
