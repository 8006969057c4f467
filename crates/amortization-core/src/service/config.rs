use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::ServiceError;
use super::ServiceResult;

pub const ENV_DEFAULT_PAGE_LIMIT: &str = "AMORT_DEFAULT_PAGE_LIMIT";
pub const ENV_MAX_PAGE_LIMIT: &str = "AMORT_MAX_PAGE_LIMIT";
pub const ENV_FIRST_SUPERUSER_EMAIL: &str = "AMORT_FIRST_SUPERUSER_EMAIL";
pub const ENV_FIRST_SUPERUSER_NAME: &str = "AMORT_FIRST_SUPERUSER_NAME";

/// Settings for the loan service. Every field has a default; there is no
/// built-in superuser account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "ServiceConfig::default_page_limit_value")]
    pub default_page_limit: usize,
    #[serde(default = "ServiceConfig::max_page_limit_value")]
    pub max_page_limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_superuser_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_superuser_name: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_limit: Self::default_page_limit_value(),
            max_page_limit: Self::max_page_limit_value(),
            first_superuser_email: None,
            first_superuser_name: None,
        }
    }
}

impl ServiceConfig {
    pub fn default_page_limit_value() -> usize {
        100
    }

    pub fn max_page_limit_value() -> usize {
        10_000
    }

    pub fn from_json_str(json: &str) -> ServiceResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ServiceError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> ServiceResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .map_err(|e| ServiceError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&data)
    }

    /// Defaults overridden by `AMORT_*` environment variables.
    pub fn from_env() -> ServiceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ServiceResult<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_DEFAULT_PAGE_LIMIT) {
            config.default_page_limit = parse_limit(ENV_DEFAULT_PAGE_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_PAGE_LIMIT) {
            config.max_page_limit = parse_limit(ENV_MAX_PAGE_LIMIT, &raw)?;
        }
        config.first_superuser_email = lookup(ENV_FIRST_SUPERUSER_EMAIL).filter(|v| !v.trim().is_empty());
        config.first_superuser_name = lookup(ENV_FIRST_SUPERUSER_NAME).filter(|v| !v.trim().is_empty());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ServiceResult<()> {
        if self.max_page_limit == 0 {
            return Err(ServiceError::InvalidConfig("max_page_limit must be positive".into()));
        }
        if self.default_page_limit == 0 || self.default_page_limit > self.max_page_limit {
            return Err(ServiceError::InvalidConfig(format!(
                "default_page_limit must be between 1 and {}",
                self.max_page_limit
            )));
        }
        Ok(())
    }
}

fn parse_limit(key: &str, raw: &str) -> ServiceResult<usize> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::InvalidConfig(format!("{key} must be a positive integer, got '{raw}'")))
}
