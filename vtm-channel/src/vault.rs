//! Secret vault for the account password
//!
//! Loads the password from a file (mounted secret) or an environment
//! variable. Secret values are never logged; only names and sources are.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ChannelError, Result};

/// Source for loading a secret
#[derive(Debug, Clone)]
pub enum SecretSource {
    /// Load the secret from a file path
    File(PathBuf),
    /// Load the secret from an environment variable
    Env(String),
}

pub struct SecretVault;

impl SecretVault {
    /// Load a secret from a specified source.
    ///
    /// `name` is only used for logging and error messages.
    pub fn load(name: &str, source: &SecretSource) -> Result<String> {
        let value = match source {
            SecretSource::File(path) => {
                debug!(secret_name = name, source = "file", path = %path.display(), "Loading secret");
                fs::read_to_string(path)
                    .map_err(|e| {
                        ChannelError::Vault(format!("read secret '{name}' from {}: {e}", path.display()))
                    })?
                    .trim_end_matches(['\r', '\n'])
                    .to_string()
            }
            SecretSource::Env(var) => {
                debug!(secret_name = name, source = "env", var = var.as_str(), "Loading secret");
                std::env::var(var).map_err(|_| {
                    ChannelError::Vault(format!("secret '{name}' not set in ${var}"))
                })?
            }
        };

        if value.is_empty() {
            return Err(ChannelError::Vault(format!("secret '{name}' is empty")));
        }
        Ok(value)
    }

    /// Try sources in order, returning the first that yields a value.
    ///
    /// When every source fails, the last failure is returned so the caller
    /// can see which file or variable was misconfigured.
    pub fn load_first(name: &str, sources: &[SecretSource]) -> Result<String> {
        let mut last_error = None;
        for source in sources {
            match Self::load(name, source) {
                Ok(value) => return Ok(value),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| {
            ChannelError::Vault(format!("secret '{name}': no sources configured"))
        }))
    }
}
