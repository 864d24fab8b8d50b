//! Per-call request descriptors.
//!
//! A [`RequestBuilder`] accumulates one call's configuration and finalizes
//! into an immutable [`ApiRequest`], which the
//! [`Service`](crate::service::Service) consumes on dispatch. Nothing is
//! shared between calls, so a descriptor can never leak into the next one.
//!
//! ```ignore
//! let request = ApiRequest::post("organization")
//!     .json(serde_json::json!({"name": "Acme"}))
//!     .build()?;
//! let response = service.execute(request).await?;
//! ```

use std::fmt;
use std::path::Path;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::Value;

use crate::error::ServiceDeskError;

/// Header gating endpoints that Atlassian still marks experimental.
pub const EXPERIMENTAL_API_HEADER: &str = "X-ExperimentalApi";

/// Value that opts in to experimental endpoints.
pub const EXPERIMENTAL_API_OPT_IN: &str = "opt-in";

/// Header that disables XSRF checks on multipart uploads.
pub const ATLASSIAN_TOKEN_HEADER: &str = "X-Atlassian-Token";

/// Value accepted by [`ATLASSIAN_TOKEN_HEADER`] for uploads.
pub const ATLASSIAN_TOKEN_NO_CHECK: &str = "no-check";

/// One field of a `multipart/form-data` body.
#[derive(Clone)]
pub struct MultipartField {
    name: String,
    contents: Vec<u8>,
    filename: Option<String>,
}

impl MultipartField {
    /// Creates a field from in-memory contents.
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
            filename: None,
        }
    }

    /// Sets the filename reported for this field.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Reads a file from disk into a field, using its file name.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::Io` if the file cannot be read.
    pub async fn from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, ServiceDeskError> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let field = Self::new(name, contents);

        Ok(match path.file_name() {
            Some(file_name) => field.with_filename(file_name.to_string_lossy()),
            None => field,
        })
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw contents.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Filename, if one was set.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    fn into_part(self) -> (String, Part) {
        let part = Part::bytes(self.contents);
        let part = match self.filename {
            Some(filename) => part.file_name(filename),
            None => part,
        };
        (self.name, part)
    }
}

impl fmt::Debug for MultipartField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipartField")
            .field("name", &self.name)
            .field("len", &self.contents.len())
            .field("filename", &self.filename)
            .finish()
    }
}

/// Body of a finalized request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// JSON body.
    Json(Value),
    /// `multipart/form-data` body.
    Multipart(Vec<MultipartField>),
}

impl RequestBody {
    /// Converts multipart fields into a reqwest form.
    pub(crate) fn into_form(fields: Vec<MultipartField>) -> Form {
        fields.into_iter().fold(Form::new(), |form, field| {
            let (name, part) = field.into_part();
            form.part(name, part)
        })
    }
}

/// An immutable, fully configured request for one dispatch.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: RequestBody,
}

impl ApiRequest {
    /// Starts an empty builder. Method and path must be set before `build()`.
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Starts a GET request for `path`.
    pub fn get(path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::default().method(Method::GET).path(path)
    }

    /// Starts a POST request for `path`.
    pub fn post(path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::default().method(Method::POST).path(path)
    }

    /// Starts a PUT request for `path`.
    pub fn put(path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::default().method(Method::PUT).path(path)
    }

    /// Starts a DELETE request for `path`.
    pub fn delete(path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::default().method(Method::DELETE).path(path)
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the API prefix, including any literal query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Headers attached to the call (credentials are added on dispatch).
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body to send.
    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Returns true if the experimental-API opt-in header is set.
    pub fn is_experimental(&self) -> bool {
        self.headers
            .get(EXPERIMENTAL_API_HEADER)
            .is_some_and(|v| v == EXPERIMENTAL_API_OPT_IN)
    }

    pub(crate) fn into_parts(self) -> (Method, String, HeaderMap, RequestBody) {
        (self.method, self.path, self.headers, self.body)
    }
}

/// Accumulates the configuration of one call.
///
/// Each setter consumes and returns the builder. Header calls merge at key
/// level; `json` overwrites a previous payload; a multipart body always
/// wins over a JSON payload, whichever was configured first.
#[derive(Debug, Default, Clone)]
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    json: Option<Value>,
    headers: Vec<(String, String)>,
    multipart: Option<Vec<MultipartField>>,
}

impl RequestBuilder {
    /// Sets the HTTP verb. Unusual verbs are passed through to the server.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the path relative to `rest/servicedeskapi/`.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the JSON payload, replacing any previous one.
    pub fn json(mut self, value: Value) -> Self {
        self.json = Some(value);
        self
    }

    /// Sets one header, replacing an earlier value with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Merges several headers.
    pub fn headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        headers
            .into_iter()
            .fold(self, |builder, (k, v)| builder.header(k, v))
    }

    /// Opts in to an experimental endpoint.
    pub fn experimental(self) -> Self {
        self.header(EXPERIMENTAL_API_HEADER, EXPERIMENTAL_API_OPT_IN)
    }

    /// Sets a multipart body.
    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.multipart = Some(fields);
        self
    }

    /// Finalizes the descriptor.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::Validation` if the method or path was never
    /// set, or a header name/value is not valid HTTP.
    pub fn build(self) -> Result<ApiRequest, ServiceDeskError> {
        let method = self
            .method
            .ok_or_else(|| ServiceDeskError::validation("request method not set"))?;
        let path = self
            .path
            .ok_or_else(|| ServiceDeskError::validation("request path not set"))?;

        let mut headers = HeaderMap::new();
        for (name, value) in self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                ServiceDeskError::validation(format!("invalid header name: {:?}", name))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|_| {
                ServiceDeskError::validation(format!("invalid value for header {}", name))
            })?;
            headers.insert(header_name, header_value);
        }

        let body = match (self.multipart, self.json) {
            (Some(fields), _) => RequestBody::Multipart(fields),
            (None, Some(value)) => RequestBody::Json(value),
            (None, None) => RequestBody::Empty,
        };

        Ok(ApiRequest {
            method,
            path,
            headers,
            body,
        })
    }
}
