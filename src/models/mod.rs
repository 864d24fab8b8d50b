//! Data models for the Jira Service Desk API.
//!
//! This module contains the JSON bodies sent to endpoints, the query
//! parameter types for list endpoints, and the few response shapes the
//! client decodes itself.

mod common;
mod params;
mod request;
mod request_type;

pub use common::*;
pub use params::*;
pub use request::*;
pub use request_type::*;
