//! Multi-tenant loan record keeping on top of the amortization engine.
//!
//! Storage and credential checks are injected through [`LoanStore`] and
//! [`IdentityProvider`]. The service decides who may see which loan, validates
//! request parameters, and hands plain loan terms to the engine.

pub mod access;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod store;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use identity::{IdentityProvider, StaticIdentityProvider};
pub use models::{Loan, LoanId, LoanPage, NewUser, User, UserId};
pub use store::{InMemoryLoanStore, LoanStore};

use tracing::{debug, info};

use crate::amortization::{build_schedule, project_summary, validate_month};
use crate::types::{LoanTerms, MonthlySummary, PublicScheduleRow};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Request-facing operations over loans.
pub struct LoanService<S, I> {
    store: S,
    identity: I,
    config: ServiceConfig,
}

impl<S: LoanStore, I: IdentityProvider> LoanService<S, I> {
    pub fn new(store: S, identity: I, config: ServiceConfig) -> Self {
        Self {
            store,
            identity,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Resolve a credential to an active user.
    pub fn authenticate(&self, credential: &str) -> ServiceResult<User> {
        let user_id = self
            .identity
            .resolve(credential)?
            .ok_or(ServiceError::Unauthenticated)?;
        let user = self
            .store
            .user_by_id(user_id)?
            .ok_or(ServiceError::Unauthenticated)?;
        if !user.is_active {
            return Err(ServiceError::InactiveUser);
        }
        Ok(user)
    }

    /// Register a new account. Superusers only.
    pub fn create_user(&self, credential: &str, new_user: NewUser) -> ServiceResult<User> {
        let caller = self.authenticate(credential)?;
        if !caller.is_superuser {
            return Err(ServiceError::Forbidden);
        }
        let user = self.store.insert_user(new_user)?;
        info!(user_id = user.id, created_by = caller.id, "created user");
        Ok(user)
    }

    /// Record a loan owned by the caller.
    pub fn create_loan(&self, credential: &str, terms: LoanTerms) -> ServiceResult<Loan> {
        let caller = self.authenticate(credential)?;
        terms.validate()?;
        let loan = self.store.insert_loan(caller.id, terms)?;
        info!(loan_id = loan.id, owner_id = caller.id, "created loan");
        Ok(loan)
    }

    /// Loans the caller owns. Shared loans are not listed.
    pub fn list_loans(&self, credential: &str, skip: usize, limit: Option<usize>) -> ServiceResult<LoanPage> {
        let caller = self.authenticate(credential)?;
        let limit = limit.unwrap_or(self.config.default_page_limit);
        if limit == 0 || limit > self.config.max_page_limit {
            return Err(ServiceError::InvalidPageLimit {
                limit,
                max: self.config.max_page_limit,
            });
        }
        let data = self.store.loans_owned_by(caller.id, skip, limit)?;
        Ok(LoanPage {
            count: data.len(),
            data,
        })
    }

    /// Public schedule view: payment and balance per month.
    pub fn loan_schedule(&self, credential: &str, loan_id: LoanId) -> ServiceResult<Vec<PublicScheduleRow>> {
        let caller = self.authenticate(credential)?;
        let loan = self.readable_loan(&caller, loan_id)?;
        let terms = &loan.terms;
        let schedule = build_schedule(terms.principal, terms.annual_rate, terms.term_months)?;
        Ok(schedule.iter().map(PublicScheduleRow::from).collect())
    }

    /// Cumulative position after `month`. The month is checked against the
    /// loan term before the engine runs.
    pub fn loan_summary(&self, credential: &str, loan_id: LoanId, month: i64) -> ServiceResult<MonthlySummary> {
        let caller = self.authenticate(credential)?;
        let loan = self.readable_loan(&caller, loan_id)?;
        let terms = &loan.terms;
        let month = validate_month(month, terms.term_months)?;
        Ok(project_summary(terms.principal, terms.annual_rate, terms.term_months, month)?)
    }

    /// Grant read access on a loan to the user registered under `email`.
    ///
    /// Does nothing (and reports success) when the loan is unknown, the caller
    /// may not share it, the email is unknown, or the email is the caller's
    /// own, so the call never reveals which loans or users exist.
    pub fn share_loan(&self, credential: &str, loan_id: LoanId, email: &str) -> ServiceResult<()> {
        let caller = self.authenticate(credential)?;

        let Some(loan) = self.store.loan(loan_id)? else {
            debug!(loan_id, caller = caller.id, "share ignored: no such loan");
            return Ok(());
        };
        if !access::can_share(&caller, &loan) {
            debug!(loan_id, caller = caller.id, "share ignored: caller cannot share");
            return Ok(());
        }
        let Some(target) = self.store.user_by_email(email)? else {
            debug!(loan_id, caller = caller.id, "share ignored: unknown email");
            return Ok(());
        };
        if target.id == caller.id {
            return Ok(());
        }

        self.store.add_share(loan.id, target.id)?;
        info!(loan_id, shared_with = target.id, granted_by = caller.id, "shared loan");
        Ok(())
    }

    /// The loan, if the caller may read it. Missing and forbidden loans are
    /// reported identically.
    fn readable_loan(&self, caller: &User, loan_id: LoanId) -> ServiceResult<Loan> {
        let not_found = || ServiceError::LoanNotFound { loan_id };

        let loan = self.store.loan(loan_id)?.ok_or_else(not_found)?;
        let shared = self.store.is_shared_with(loan.id, caller.id)?;
        if !access::can_read(caller, &loan, shared) {
            debug!(loan_id, caller = caller.id, "read denied");
            return Err(not_found());
        }
        Ok(loan)
    }
}

/// Create the configured first superuser unless that email already exists.
/// Returns the new account, or `None` when nothing was created.
pub fn bootstrap_superuser<S: LoanStore>(store: &S, config: &ServiceConfig) -> ServiceResult<Option<User>> {
    let Some(email) = config.first_superuser_email.as_deref() else {
        return Ok(None);
    };
    if store.user_by_email(email)?.is_some() {
        return Ok(None);
    }
    let user = store.insert_user(NewUser {
        email: email.to_string(),
        full_name: config.first_superuser_name.clone(),
        is_superuser: true,
    })?;
    info!(user_id = user.id, "bootstrapped superuser");
    Ok(Some(user))
}
