//! Transit service configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the transport.rest endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Root of the location and nearby-stop endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Root of the station departures endpoint
    #[serde(default = "default_departures_base_url")]
    pub departures_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://v5.vbb.transport.rest".to_string()
}

fn default_departures_base_url() -> String {
    "https://2.bvg.transport.rest".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("departures/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            departures_base_url: default_departures_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl TransitConfig {
    /// Point both endpoints at the same root, e.g. a mock server
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            departures_base_url: base_url.clone(),
            base_url,
            ..Self::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("base_url", &self.base_url),
            ("departures_base_url", &self.departures_base_url),
        ] {
            if value.is_empty() {
                return Err(format!("{name} must not be empty"));
            }
            let url = Url::parse(value).map_err(|e| format!("{name} is not a valid URL: {e}"))?;
            if url.cannot_be_a_base() {
                return Err(format!("{name} cannot be used as a base URL"));
            }
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
