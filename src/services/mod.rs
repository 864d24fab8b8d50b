//! Endpoint groups of the Service Desk API.
//!
//! Each service borrows the shared [`Service`](crate::service::Service)
//! dispatcher and maps one method onto one REST endpoint. They shape the
//! path, query string and body, then hand a finished
//! [`ApiRequest`](crate::builder::ApiRequest) to the dispatcher.

mod customer;
mod info;
mod knowledgebase;
mod organization;
mod request;
mod request_type;
mod servicedesk;

pub use customer::CustomerService;
pub use info::InfoService;
pub use knowledgebase::KnowledgebaseService;
pub use organization::OrganizationService;
pub use request::RequestService;
pub use request_type::RequestTypeService;
pub use servicedesk::ServiceDeskService;

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::error::ServiceDeskError;
use crate::query::Pagination;

/// Default page for the global knowledge base and request type searches.
fn global_search_page() -> Pagination {
    Pagination::default().with_limit(100)
}

/// Percent-encodes a caller-supplied path segment.
///
/// Keeps IDs and property keys from injecting extra path segments or a
/// query string.
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Serializes a body model.
fn to_body<T: Serialize>(body: &T) -> Result<Value, ServiceDeskError> {
    Ok(serde_json::to_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encodes_separators() {
        assert_eq!(segment("SD-12"), "SD-12");
        assert_eq!(segment("../admin"), "..%2Fadmin");
        assert_eq!(segment("key?x=1"), "key%3Fx%3D1");
    }
}
