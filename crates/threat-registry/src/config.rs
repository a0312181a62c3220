//! Registry configuration with environment overrides.

use crate::domain::Identity;
use std::env;
use thiserror::Error;

/// Environment variable holding the bootstrap admin identity.
pub const ENV_ADMIN: &str = "THREAT_REGISTRY_ADMIN";

/// Configuration errors, raised before a registry exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No bootstrap admin was supplied
    #[error("Initial admin identity is required (THREAT_REGISTRY_ADMIN)")]
    MissingAdmin,
}

/// Threat Registry configuration
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Bootstrap admin identity.
    pub initial_admin: Identity,
}

impl RegistryConfig {
    /// Configuration for the given bootstrap admin.
    pub fn new(initial_admin: impl Into<Identity>) -> Self {
        Self {
            initial_admin: initial_admin.into(),
        }
    }

    /// Load configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `THREAT_REGISTRY_ADMIN`: bootstrap admin identity (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::new(lookup(ENV_ADMIN).unwrap_or_default());
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot bootstrap a registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_admin.is_empty() {
            return Err(ConfigError::MissingAdmin);
        }
        Ok(())
    }
}
