use std::env;
use std::error::Error;
use std::fmt::{self, Display};
use std::time::Duration;

use beautygpt_http_model::{HttpConfig, HttpConfigBuilder};

/// Environment variable holding the base address of the remote service.
pub const API_URL_VAR: &str = "BEAUTYGPT_API_URL";

/// Environment variable holding the transport timeout in seconds.
pub const TIMEOUT_VAR: &str = "BEAUTYGPT_TIMEOUT_SECS";

/// Error returned when an environment variable has an unusable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

impl ConfigError {
    /// Returns the name of the offending variable.
    #[inline]
    pub fn var(&self) -> &'static str {
        self.var
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} {:?}: {}", self.var, self.value, self.reason)
    }
}

impl Error for ConfigError {}

/// Settings of the terminal client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    http: HttpConfig,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Unset variables fall back to their defaults.
    #[inline]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value
    /// of a variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = HttpConfigBuilder::new();

        if let Some(value) = lookup(API_URL_VAR) {
            let url = value.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError {
                    var: API_URL_VAR,
                    value,
                    reason: "expected an http:// or https:// address",
                });
            }
            builder = builder.with_base_url(url);
        }

        if let Some(value) = lookup(TIMEOUT_VAR) {
            match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    builder = builder.with_timeout(Duration::from_secs(secs));
                }
                _ => {
                    return Err(ConfigError {
                        var: TIMEOUT_VAR,
                        value,
                        reason: "expected a positive number of seconds",
                    });
                }
            }
        }

        Ok(Self {
            http: builder.build(),
        })
    }

    /// Returns the settings of the HTTP provider.
    #[inline]
    pub fn http_config(&self) -> &HttpConfig {
        &self.http
    }
}
