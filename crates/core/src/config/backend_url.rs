//! Backend base URL resolution.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{DEFAULT_BACKEND_HOST, DEFAULT_MODE, ENV_BACKEND_URL, ENV_MODE};

static IPV4_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}(:[0-9]+)?$").expect("IPv4 host pattern is valid")
});

/// Development/production switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Development,
    Production,
}

impl AppMode {
    /// Only the literal `development` selects development; anything else is production.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            AppMode::Development
        } else {
            AppMode::Production
        }
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppMode::Development => write!(f, "development"),
            AppMode::Production => write!(f, "production"),
        }
    }
}

/// Builds the backend base URL for `host`.
///
/// Plain HTTP is only used in development and only for hosts that are
/// obviously local: an IPv4 literal with an optional port, or anything
/// starting with `localhost`. Everything else gets HTTPS.
pub fn resolve_backend_url(mode: AppMode, host: &str) -> String {
    let is_local = IPV4_HOST.is_match(host) || host.starts_with("localhost");
    if mode == AppMode::Development && is_local {
        format!("http://{}", host)
    } else {
        format!("https://{}", host)
    }
}

/// Resolves the backend URL from the process environment at call time.
pub fn backend_url_from_env() -> String {
    backend_url_from_lookup(|key| std::env::var(key).ok())
}

/// Resolves the backend URL from an arbitrary key lookup.
pub fn backend_url_from_lookup<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    resolve_backend_url(mode_from_lookup(&lookup), &host_from_lookup(&lookup))
}

/// Mode from `SPENDZEN_MODE`; blank counts as unset.
pub(crate) fn mode_from_lookup<F>(lookup: &F) -> AppMode
where
    F: Fn(&str) -> Option<String>,
{
    AppMode::parse(&non_blank(lookup(ENV_MODE)).unwrap_or_else(|| DEFAULT_MODE.to_string()))
}

/// Host from `SPENDZEN_BACKEND_URL`; blank counts as unset.
pub(crate) fn host_from_lookup<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup(ENV_BACKEND_URL)).unwrap_or_else(|| DEFAULT_BACKEND_HOST.to_string())
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
