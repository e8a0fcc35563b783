//! Configuration types for the dynup system
//!
//! The on-disk format is a small JSON document with PascalCase field names,
//! wire-compatible with existing deployments:
//!
//! ```json
//! {
//!     "Domain": "home.example.com",
//!     "Credentials": { "Username": "generated", "Password": "generated" },
//!     "SleepTime": 5
//! }
//! ```
//!
//! `SleepTime` is a poll interval in minutes. Absent or non-positive values
//! are normalized to 1 minute. Missing or empty `Domain` or credential
//! fields are a fatal startup error; the process never reaches its first
//! cycle with an unusable configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// HTTP Basic credentials for the update endpoint
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    /// Provider-issued username
    #[serde(default)]
    pub username: String,

    /// Provider-issued password
    #[serde(default)]
    pub password: String,
}

// The password never appears in Debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Main updater configuration
///
/// Immutable once loaded; owned by the [`UpdateCycle`](crate::UpdateCycle)
/// for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdaterConfig {
    /// DNS hostname whose A record this process maintains
    #[serde(default)]
    pub domain: String,

    /// Credentials for the provider update endpoint
    #[serde(default)]
    pub credentials: Credentials,

    /// Poll interval in minutes; non-positive means "use the default"
    #[serde(default)]
    pub sleep_time: i64,
}

impl UpdaterConfig {
    /// Load and validate a configuration from a JSON file
    ///
    /// Returns `Error::Config` when a required field is missing or empty,
    /// before any network component is constructed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: UpdaterConfig = serde_json::from_str(&content)?;
        config.validate()?;
        config.normalize();
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.domain.is_empty() {
            return Err(Error::config(
                "missing or empty 'Domain' field in JSON configuration",
            ));
        }
        if self.credentials.username.is_empty() {
            return Err(Error::config(
                "missing or empty 'Credentials.Username' field in JSON configuration",
            ));
        }
        if self.credentials.password.is_empty() {
            return Err(Error::config(
                "missing or empty 'Credentials.Password' field in JSON configuration",
            ));
        }
        Ok(())
    }

    /// Clamp a non-positive poll interval to the 1-minute default
    pub fn normalize(&mut self) {
        if self.sleep_time <= 0 {
            self.sleep_time = 1;
        }
    }

    /// Poll interval as a [`Duration`]
    ///
    /// Assumes [`normalize`](Self::normalize) has run; a raw non-positive
    /// value still yields the 1-minute floor.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.sleep_time.max(1) as u64 * 60)
    }
}
