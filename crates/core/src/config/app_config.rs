use std::time::Duration;

use crate::constants::{ENV_IDENTITY_PUBLISHABLE_KEY, ENV_REQUEST_TIMEOUT_MS};
use crate::errors::{Error, Result};

use super::backend_url::{
    host_from_lookup, mode_from_lookup, non_blank, resolve_backend_url, AppMode,
};

/// Application settings read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub backend_host: String,
    pub identity_publishable_key: String,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// The identity publishable key is mandatory; the client cannot hand off
    /// authentication without it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = mode_from_lookup(&lookup);
        let backend_host = host_from_lookup(&lookup);

        let identity_publishable_key = non_blank(lookup(ENV_IDENTITY_PUBLISHABLE_KEY))
            .ok_or_else(|| Error::MissingConfigKey(ENV_IDENTITY_PUBLISHABLE_KEY.to_string()))?;

        let request_timeout = match lookup(ENV_REQUEST_TIMEOUT_MS) {
            Some(raw) => {
                let millis: u64 = raw.trim().parse().map_err(|_| {
                    Error::InvalidConfigValue(format!("{}={}", ENV_REQUEST_TIMEOUT_MS, raw))
                })?;
                Some(Duration::from_millis(millis))
            }
            None => None,
        };

        Ok(Self {
            mode,
            backend_host,
            identity_publishable_key,
            request_timeout,
        })
    }

    pub fn backend_url(&self) -> String {
        resolve_backend_url(self.mode, &self.backend_host)
    }
}
