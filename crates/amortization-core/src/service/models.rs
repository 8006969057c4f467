use serde::{Deserialize, Serialize};

use crate::types::LoanTerms;

pub type UserId = u64;
pub type LoanId = u64;

/// An account known to the loan store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// Fields supplied when registering a user. Credentials live with the
/// identity provider, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

impl NewUser {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: None,
            is_superuser: false,
        }
    }
}

/// A stored loan and its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub owner_id: UserId,
    #[serde(flatten)]
    pub terms: LoanTerms,
}

/// One page of a caller's loans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPage {
    pub data: Vec<Loan>,
    pub count: usize,
}
