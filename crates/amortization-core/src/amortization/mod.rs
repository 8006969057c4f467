//! Fixed-rate amortization engine.
//!
//! Three layers: [`payment`] derives the level monthly payment, [`schedule`]
//! expands it into a rounded month-by-month ledger whose final row absorbs the
//! rounding residue, and [`summary`] slices that ledger for a single month.
//! All arithmetic is `rust_decimal::Decimal`; nothing here touches `f64`.

pub mod payment;
pub mod schedule;
pub mod summary;

pub use payment::{calculate_payment, compute_payment, PaymentOutput};
pub use schedule::{build_schedule, calculate_schedule, ScheduleOutput};
pub use summary::{calculate_summary, project_summary, validate_month, SummaryInput};
