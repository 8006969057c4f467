use std::collections::HashMap;
use std::sync::RwLock;

use super::error::ServiceError;
use super::models::UserId;
use super::ServiceResult;

/// Maps an opaque, already-verified credential to the account it belongs to.
///
/// Token formats and password checks are the provider's business. `Ok(None)`
/// means the credential is unknown; `Err` means the provider itself failed.
pub trait IdentityProvider: Send + Sync {
    fn resolve(&self, credential: &str) -> ServiceResult<Option<UserId>>;
}

/// Fixed credential table, for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct StaticIdentityProvider {
    credentials: RwLock<HashMap<String, UserId>>,
}

impl StaticIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, credential: impl Into<String>, user_id: UserId) -> ServiceResult<()> {
        self.credentials
            .write()
            .map_err(|e| ServiceError::StoreUnavailable(e.to_string()))?
            .insert(credential.into(), user_id);
        Ok(())
    }

    pub fn revoke(&self, credential: &str) -> ServiceResult<()> {
        self.credentials
            .write()
            .map_err(|e| ServiceError::StoreUnavailable(e.to_string()))?
            .remove(credential);
        Ok(())
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn resolve(&self, credential: &str) -> ServiceResult<Option<UserId>> {
        let credentials = self
            .credentials
            .read()
            .map_err(|e| ServiceError::StoreUnavailable(e.to_string()))?;
        Ok(credentials.get(credential).copied())
    }
}
