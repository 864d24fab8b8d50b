//! Normalized response envelope.
//!
//! Every dispatched call produces a [`Response`] regardless of the HTTP
//! status. The body is decoded permissively: anything that is not valid
//! JSON (including an empty body) becomes `None`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ServiceDeskError;

/// The `{status, message, body}` envelope returned by every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    message: String,
    body: Option<Value>,
}

impl Response {
    /// Builds an envelope from its parts.
    pub fn new(status: u16, message: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            status,
            message: message.into(),
            body,
        }
    }

    /// Builds an envelope from a raw response body, decoding JSON leniently.
    pub(crate) fn from_raw(status: reqwest::StatusCode, raw: &[u8]) -> Self {
        let body = if raw.is_empty() {
            None
        } else {
            match serde_json::from_slice::<Value>(raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        error = %e,
                        "Response body is not JSON, returning empty body"
                    );
                    None
                }
            }
        };

        Self {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase for the status (e.g. "Not Found").
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Decoded JSON body, if the server sent one.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consumes the envelope and returns the body.
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns Jira's `errorMessage` field from the body, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.get("errorMessage"))
            .and_then(|m| m.as_str())
    }

    /// Decodes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::MissingBody` if there is no JSON body, or
    /// `ServiceDeskError::Serialization` if the body has a different shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ServiceDeskError> {
        let body = self
            .body
            .as_ref()
            .ok_or(ServiceDeskError::MissingBody {
                status: self.status,
            })?;
        Ok(T::deserialize(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_from_raw_json_error_status() {
        let resp = Response::from_raw(StatusCode::NOT_FOUND, br#"{"errorMessage":"not found"}"#);
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.message(), "Not Found");
        assert_eq!(resp.body(), Some(&json!({"errorMessage": "not found"})));
        assert_eq!(resp.error_message(), Some("not found"));
        assert!(!resp.is_success());
    }

    #[test]
    fn test_from_raw_non_json_body_is_none() {
        let resp = Response::from_raw(StatusCode::OK, b"not json");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.message(), "OK");
        assert!(resp.body().is_none());
        assert!(resp.is_success());
    }

    #[test]
    fn test_from_raw_empty_body_is_none() {
        let resp = Response::from_raw(StatusCode::NO_CONTENT, b"");
        assert_eq!(resp.status(), 204);
        assert!(resp.into_body().is_none());
    }

    #[test]
    fn test_json_decodes_typed_body() {
        #[derive(Debug, serde::Deserialize)]
        struct Info {
            version: String,
        }

        let resp = Response::new(200, "OK", Some(json!({"version": "4.1.0"})));
        let info: Info = resp.json().unwrap();
        assert_eq!(info.version, "4.1.0");
    }

    #[test]
    fn test_json_without_body_errors() {
        let resp = Response::new(204, "No Content", None);
        let err = resp.json::<Value>().unwrap_err();
        assert!(matches!(err, ServiceDeskError::MissingBody { status: 204 }));
    }
}
