use super::models::{Loan, User};

/// Superusers read everything; owners and users the loan was shared with
/// read that loan.
pub fn can_read(user: &User, loan: &Loan, shared_with_user: bool) -> bool {
    user.is_superuser || loan.owner_id == user.id || shared_with_user
}

/// Only the owner (or a superuser) can grant read access; shared users
/// cannot re-share.
pub fn can_share(user: &User, loan: &Loan) -> bool {
    user.is_superuser || loan.owner_id == user.id
}
