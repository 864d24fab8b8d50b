//! # jira-servicedesk
//!
//! Async client SDK for the Jira Service Desk REST API
//! (`rest/servicedeskapi/`).
//!
//! Every endpoint method builds one request descriptor and hands it to a
//! shared dispatcher, which attaches HTTP Basic credentials, performs exactly
//! one HTTP call and returns a uniform `{status, message, body}` envelope.
//!
//! ## Features
//!
//! - **Endpoint coverage**: customers, info, knowledge base, organizations,
//!   customer requests, request types and service desks
//! - **Uniform responses**: HTTP error statuses come back as envelopes, not
//!   errors; only transport failures are errors
//! - **Uploads**: multipart temporary-file uploads with the XSRF header
//! - **Concurrency**: per-call descriptors, so one client serves concurrent
//!   calls
//! - **Security**: passwords are never logged; TLS verification is on unless
//!   explicitly disabled
//!
//! No retries, rate limiting, pagination traversal or caching is done; those
//! are left to the caller.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration from code or environment variables
//! - [`error`] - Error type
//! - [`builder`] - Per-call request descriptors
//! - [`service`] - The dispatcher
//! - [`response`] - The response envelope
//! - [`query`] - Query-string and pagination helpers
//! - [`models`] - Request bodies and query parameter types
//! - [`services`] - Endpoint groups
//! - [`client`] - The [`JiraServiceDesk`] facade
//!
//! ## Configuration
//!
//! [`Config::from_env`] reads:
//!
//! - `JSD_HOST`: Base URL of the Jira instance
//! - `JSD_USERNAME`: Username for basic authentication
//! - `JSD_PASSWORD`: Password or API token
//!
//! Optional:
//! - `JSD_ACCEPT_INVALID_CERTS`: `true` for self-signed on-prem instances
//! - `JSD_TIMEOUT_SECS`: request timeout (default 30)
//! - `RUST_LOG`: Log level for the bundled binary (e.g., `jira_servicedesk=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use jira_servicedesk::{Config, JiraServiceDesk};
//! use jira_servicedesk::models::CustomerRequest;
//!
//! async fn example() -> Result<(), jira_servicedesk::ServiceDeskError> {
//!     let config = Config::new("https://jira.example.com", "agent", "secret")?;
//!     let jsd = JiraServiceDesk::new(&config)?;
//!
//!     let request = CustomerRequest::new("10", "25")
//!         .with_summary("Printer on fire")
//!         .with_description("Third floor");
//!
//!     let response = jsd.request().create_customer_request(&request).await?;
//!     if response.status() >= 400 {
//!         eprintln!("Jira said no: {:?}", response.error_message());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod response;
pub mod service;
pub mod services;

pub use builder::{ApiRequest, MultipartField, RequestBuilder};
pub use client::JiraServiceDesk;
pub use config::Config;
pub use error::ServiceDeskError;
pub use query::Pagination;
pub use response::Response;
pub use service::Service;
