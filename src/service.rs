//! HTTP dispatcher for the Jira Service Desk API.
//!
//! This module provides the `Service` struct, which executes one
//! [`ApiRequest`] per call against the configured host and normalizes the
//! outcome into a [`Response`] envelope.
//!
//! # Error Model
//!
//! - Any HTTP status, including 4xx/5xx, is returned as a `Response`.
//! - Only transport failures (DNS, connect, TLS, timeout, body read) are
//!   returned as `ServiceDeskError`.
//! - Nothing is retried.
//!
//! # Security
//!
//! The password is never logged. Transport error messages are sanitized
//! before they reach the log.

use std::time::Duration;

use reqwest::{Client, Method};

use crate::builder::{ApiRequest, RequestBody};
use crate::config::Config;
use crate::error::ServiceDeskError;
use crate::response::Response;

/// Fixed prefix between the host and every endpoint path.
pub const API_PREFIX: &str = "rest/servicedeskapi/";

/// Dispatcher for Service Desk API calls.
///
/// Holds the host, the credentials and a pooled HTTP client. It carries no
/// per-call state, so one instance (or its clones) can serve concurrent
/// calls.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let service = Service::new(&config)?;
///
/// let response = service.execute(ApiRequest::get("info").build()?).await?;
/// println!("{} {}", response.status(), response.message());
/// ```
#[derive(Clone)]
pub struct Service {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL ending with `/` (e.g., `https://jira.example.com/`).
    host: String,

    /// Basic-auth username.
    username: String,

    /// Basic-auth password.
    /// SECURITY: Never log this value!
    password: String,

    /// Timeout configured on the client, kept for error reporting.
    timeout: Duration,
}

impl Service {
    /// Creates a dispatcher from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, ServiceDeskError> {
        if config.accept_invalid_certs {
            tracing::warn!(host = %config.host, "TLS certificate verification is disabled");
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(ServiceDeskError::HttpClient)?;

        Ok(Self {
            http,
            host: config.host.clone(),
            username: config.username.clone(),
            password: config.password().to_string(),
            timeout: config.timeout,
        })
    }

    /// Base URL this dispatcher talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Username used for basic authentication.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Replaces the credentials used by subsequent calls.
    pub fn set_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.username = username.into();
        self.password = password.into();
        tracing::debug!(username = %self.username, "Credentials updated");
    }

    /// Composes the full URL for a relative path.
    ///
    /// The path is appended verbatim, so a literal query string on it is
    /// preserved as-is.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}{}", self.host, API_PREFIX, path)
    }

    /// Executes one request and returns the normalized envelope.
    ///
    /// Basic-auth credentials are attached from the dispatcher's current
    /// username and password.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::Timeout` or `ServiceDeskError::Transport`
    /// when no HTTP response could be obtained. HTTP error statuses are not
    /// errors.
    pub async fn execute(&self, request: ApiRequest) -> Result<Response, ServiceDeskError> {
        let (method, path, headers, body) = request.into_parts();
        let url = self.url_for(&path);

        tracing::debug!(
            method = %method,
            path = %path,
            "Making Service Desk API request"
        );

        let req = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.username, Some(&self.password))
            .headers(headers);

        let req = match body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(fields) => req.multipart(RequestBody::into_form(fields)),
        };

        let response = req
            .send()
            .await
            .map_err(|e| self.transport_error(e, &method, &path))?;
        let status = response.status();

        let raw = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e, &method, &path))?;

        tracing::debug!(status = status.as_u16(), path = %path, "Service Desk API response");
        tracing::trace!(body = %String::from_utf8_lossy(&raw), "Service Desk API response body");

        Ok(Response::from_raw(status, &raw))
    }

    /// Classifies a reqwest failure and logs it without credentials.
    fn transport_error(&self, e: reqwest::Error, method: &Method, path: &str) -> ServiceDeskError {
        let operation = format!("{} {}", method, path);
        let err = if e.is_timeout() {
            ServiceDeskError::timeout(self.timeout, operation.clone())
        } else {
            ServiceDeskError::Transport(e)
        };

        tracing::debug!(
            operation = %operation,
            error = %err.sanitized_display(&self.password),
            "Service Desk API request failed"
        );

        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Creates a Service for unit tests without requiring env vars.
    fn test_service() -> Service {
        let config = Config::new("https://jira.example.com", "agent", "secret").unwrap();
        Service::new(&config).unwrap()
    }

    #[test]
    fn test_url_for_joins_host_prefix_and_path() {
        let service = test_service();
        assert_eq!(
            service.url_for("servicedesk/1/queue"),
            "https://jira.example.com/rest/servicedeskapi/servicedesk/1/queue"
        );
    }

    #[test]
    fn test_url_for_keeps_literal_query() {
        let service = test_service();
        assert_eq!(
            service.url_for("organization?start=0&limit=50"),
            "https://jira.example.com/rest/servicedeskapi/organization?start=0&limit=50"
        );
    }

    #[test]
    fn test_set_credentials_replaces_both() {
        let mut service = test_service();
        service.set_credentials("other", "rotated");
        assert_eq!(service.username(), "other");
        assert_eq!(service.password, "rotated");
    }

    #[test]
    fn test_new_with_invalid_certs_allowed() {
        let config = Config::new("https://jira.internal", "agent", "secret")
            .unwrap()
            .with_accept_invalid_certs(true);
        let service = Service::new(&config).unwrap();
        assert_eq!(service.host(), "https://jira.internal/");
    }
}
