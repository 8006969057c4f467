use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::ServiceError;
use super::models::{Loan, LoanId, NewUser, User, UserId};
use super::ServiceResult;
use crate::types::LoanTerms;

/// Record keeping for users, loans and share grants.
///
/// Implementations own persistence; the service only relies on these queries.
pub trait LoanStore: Send + Sync {
    /// Fails with `EmailAlreadyRegistered` when the email is taken.
    fn insert_user(&self, user: NewUser) -> ServiceResult<User>;
    fn user_by_id(&self, id: UserId) -> ServiceResult<Option<User>>;
    fn user_by_email(&self, email: &str) -> ServiceResult<Option<User>>;
    fn insert_loan(&self, owner_id: UserId, terms: LoanTerms) -> ServiceResult<Loan>;
    fn loan(&self, id: LoanId) -> ServiceResult<Option<Loan>>;
    /// Loans owned by `owner_id` in id order.
    fn loans_owned_by(&self, owner_id: UserId, skip: usize, limit: usize) -> ServiceResult<Vec<Loan>>;
    /// Idempotent.
    fn add_share(&self, loan_id: LoanId, user_id: UserId) -> ServiceResult<()>;
    fn is_shared_with(&self, loan_id: LoanId, user_id: UserId) -> ServiceResult<bool>;
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    loans: BTreeMap<LoanId, Loan>,
    shares: HashSet<(LoanId, UserId)>,
    next_user_id: UserId,
    next_loan_id: LoanId,
}

/// Process-local store, ids assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemoryLoanStore {
    tables: RwLock<Tables>,
}

impl InMemoryLoanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deactivated accounts keep their loans but can no longer act.
    pub fn set_active(&self, id: UserId, active: bool) -> ServiceResult<()> {
        if let Some(user) = self.write()?.users.get_mut(&id) {
            user.is_active = active;
        }
        Ok(())
    }

    fn read(&self) -> ServiceResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| ServiceError::StoreUnavailable(e.to_string()))
    }

    fn write(&self) -> ServiceResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| ServiceError::StoreUnavailable(e.to_string()))
    }
}

impl LoanStore for InMemoryLoanStore {
    fn insert_user(&self, user: NewUser) -> ServiceResult<User> {
        let mut tables = self.write()?;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(ServiceError::EmailAlreadyRegistered { email: user.email });
        }
        tables.next_user_id += 1;
        let record = User {
            id: tables.next_user_id,
            email: user.email,
            full_name: user.full_name,
            is_active: true,
            is_superuser: user.is_superuser,
        };
        tables.users.insert(record.id, record.clone());
        Ok(record)
    }

    fn user_by_id(&self, id: UserId) -> ServiceResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    fn user_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        Ok(self.read()?.users.values().find(|u| u.email == email).cloned())
    }

    fn insert_loan(&self, owner_id: UserId, terms: LoanTerms) -> ServiceResult<Loan> {
        let mut tables = self.write()?;
        tables.next_loan_id += 1;
        let loan = Loan {
            id: tables.next_loan_id,
            owner_id,
            terms,
        };
        tables.loans.insert(loan.id, loan.clone());
        Ok(loan)
    }

    fn loan(&self, id: LoanId) -> ServiceResult<Option<Loan>> {
        Ok(self.read()?.loans.get(&id).cloned())
    }

    fn loans_owned_by(&self, owner_id: UserId, skip: usize, limit: usize) -> ServiceResult<Vec<Loan>> {
        Ok(self
            .read()?
            .loans
            .values()
            .filter(|l| l.owner_id == owner_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    fn add_share(&self, loan_id: LoanId, user_id: UserId) -> ServiceResult<()> {
        self.write()?.shares.insert((loan_id, user_id));
        Ok(())
    }

    fn is_shared_with(&self, loan_id: LoanId, user_id: UserId) -> ServiceResult<bool> {
        Ok(self.read()?.shares.contains(&(loan_id, user_id)))
    }
}
