//! Configuration management for the Jira Service Desk client.
//!
//! Configuration can be built programmatically with [`Config::new`] or
//! loaded from environment variables with [`Config::from_env`].

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ServiceDeskError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to a Jira Service Desk instance.
///
/// The password is stored but never logged; the `Debug` impl redacts it.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the Jira instance (e.g., `https://jira.example.com/`).
    /// Always ends with a slash once validated.
    pub host: String,

    /// Username (or account email) for basic authentication.
    pub username: String,

    /// Password or API token for basic authentication.
    /// This value must never be logged or included in error messages.
    password: String,

    /// Skip TLS certificate verification. Off by default; only meant for
    /// on-prem instances with self-signed certificates.
    pub accept_invalid_certs: bool,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Creates a validated configuration with TLS verification enabled and
    /// the default timeout.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::Config` if the host is not an absolute
    /// http(s) URL or the username is empty.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ServiceDeskError> {
        let host = Self::validate_host(host.into())?;
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ServiceDeskError::invalid_config("username must not be empty"));
        }

        Ok(Config {
            host,
            username,
            password: password.into(),
            accept_invalid_certs: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `JSD_HOST`: Base URL of the Jira instance
    /// - `JSD_USERNAME`: Username for basic authentication
    /// - `JSD_PASSWORD`: Password or API token
    ///
    /// # Optional Environment Variables
    ///
    /// - `JSD_ACCEPT_INVALID_CERTS`: `true` to skip TLS verification
    /// - `JSD_TIMEOUT_SECS`: request timeout in seconds (default 30)
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, ServiceDeskError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ServiceDeskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = Self::get_required(&lookup, "JSD_HOST")?;
        let username = Self::get_required(&lookup, "JSD_USERNAME")?;
        let password = Self::get_required(&lookup, "JSD_PASSWORD")?;

        let mut config = Self::new(host, username, password)?;

        if let Some(raw) = lookup("JSD_ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs = Self::parse_flag("JSD_ACCEPT_INVALID_CERTS", &raw)?;
        }

        if let Some(raw) = lookup("JSD_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ServiceDeskError::invalid_config("JSD_TIMEOUT_SECS must be a positive integer")
            })?;
            if secs == 0 {
                return Err(ServiceDeskError::invalid_config(
                    "JSD_TIMEOUT_SECS must be a positive integer",
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Enables or disables acceptance of invalid TLS certificates.
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the password for building the basic-auth header.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Gets a required variable, returning an error if missing or empty.
    fn get_required<F>(lookup: &F, name: &str) -> Result<String, ServiceDeskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(name) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ServiceDeskError::missing_env(name)),
        }
    }

    fn parse_flag(name: &str, raw: &str) -> Result<bool, ServiceDeskError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ServiceDeskError::invalid_config(format!(
                "{} must be true or false",
                name
            ))),
        }
    }

    /// Validates the host and normalizes it to end with a single slash.
    pub(crate) fn validate_host(host: String) -> Result<String, ServiceDeskError> {
        let host = host.trim().trim_end_matches('/').to_string();

        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(ServiceDeskError::invalid_config(
                "host must start with http:// or https://",
            ));
        }

        Url::parse(&host)
            .map_err(|e| ServiceDeskError::invalid_config(format!("invalid host URL: {}", e)))?;

        Ok(format!("{}/", host))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_validate_host_appends_single_slash() {
        let result = Config::validate_host("https://jira.example.com".to_string()).unwrap();
        assert_eq!(result, "https://jira.example.com/");

        let result = Config::validate_host("https://jira.example.com//".to_string()).unwrap();
        assert_eq!(result, "https://jira.example.com/");
    }

    #[test]
    fn test_validate_host_keeps_context_path() {
        let result = Config::validate_host("https://example.com/jira/".to_string()).unwrap();
        assert_eq!(result, "https://example.com/jira/");
    }

    #[test]
    fn test_validate_host_requires_scheme() {
        assert!(Config::validate_host("jira.example.com".to_string()).is_err());
    }

    #[test]
    fn test_new_defaults_to_verified_tls() {
        let config = Config::new("https://jira.example.com", "agent", "secret").unwrap();
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_new_rejects_empty_username() {
        assert!(Config::new("https://jira.example.com", "  ", "secret").is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::new("https://jira.example.com", "agent", "topsecret").unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("topsecret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_from_lookup_reads_required_and_optional() {
        let config = Config::from_lookup(lookup_from(&[
            ("JSD_HOST", "https://jira.example.com"),
            ("JSD_USERNAME", "agent"),
            ("JSD_PASSWORD", "secret"),
            ("JSD_ACCEPT_INVALID_CERTS", "true"),
            ("JSD_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.host, "https://jira.example.com/");
        assert_eq!(config.username, "agent");
        assert_eq!(config.password(), "secret");
        assert!(config.accept_invalid_certs);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_missing_password() {
        let err = Config::from_lookup(lookup_from(&[
            ("JSD_HOST", "https://jira.example.com"),
            ("JSD_USERNAME", "agent"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("JSD_PASSWORD"));
    }

    #[test]
    fn test_from_lookup_rejects_bad_flag_and_timeout() {
        let base = [
            ("JSD_HOST", "https://jira.example.com"),
            ("JSD_USERNAME", "agent"),
            ("JSD_PASSWORD", "secret"),
        ];

        let mut vars = base.to_vec();
        vars.push(("JSD_ACCEPT_INVALID_CERTS", "maybe"));
        assert!(Config::from_lookup(lookup_from(&vars)).is_err());

        let mut vars = base.to_vec();
        vars.push(("JSD_TIMEOUT_SECS", "0"));
        assert!(Config::from_lookup(lookup_from(&vars)).is_err());
    }
}
