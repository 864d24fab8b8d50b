//! Common types shared across Service Desk endpoints.
//!
//! This module defines the paged response wrapper, Jira's error body and
//! the small JSON bodies sent by several endpoints.

use serde::{Deserialize, Serialize};

use crate::query::Pagination;

/// Paged list returned by most Service Desk collection endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Number of items on this page.
    #[serde(default)]
    pub size: u32,

    /// Index of the first item on this page.
    #[serde(default)]
    pub start: u32,

    /// Page size requested.
    #[serde(default)]
    pub limit: u32,

    /// Whether this is the final page.
    #[serde(default)]
    pub is_last_page: bool,

    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
}

impl<T> Page<T> {
    /// Returns pagination for the following page, or `None` on the last one.
    ///
    /// An empty page is treated as the last one, since advancing by zero
    /// would request the same page again.
    pub fn next_page(&self) -> Option<Pagination> {
        if self.is_last_page || self.size == 0 {
            None
        } else {
            Some(Pagination::new(self.start.saturating_add(self.size), self.limit))
        }
    }
}

/// Error body Jira returns alongside 4xx/5xx statuses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error message.
    #[serde(default)]
    pub error_message: Option<String>,

    /// Localized variant of the message.
    #[serde(default)]
    pub i18n_error_message: Option<serde_json::Value>,
}

/// `{"usernames": [...]}` body for participant, member and customer lists.
#[derive(Debug, Clone, Serialize)]
pub struct Usernames {
    /// Customer names (the `name` field of the user record).
    pub usernames: Vec<String>,
}

impl Usernames {
    /// Collects usernames from any iterator of string-likes.
    pub fn new<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            usernames: usernames.into_iter().map(Into::into).collect(),
        }
    }
}

/// `{"organizationId": n}` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRef {
    /// Organization ID.
    pub organization_id: u64,
}

/// `{"name": ...}` body for organization creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrganization {
    /// Organization name.
    pub name: String,
}

/// Body for customer creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    /// Customer email address.
    pub email: String,
    /// Display name; need not be unique.
    pub display_name: String,
}

/// Body for a new comment on a customer request.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    /// Comment text.
    pub body: String,
    /// Whether customers can see the comment.
    pub public: bool,
}

/// Decision on an approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalDecision {
    /// Approve the request.
    Approve,
    /// Decline the request.
    Decline,
}

/// `{"decision": ...}` body.
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalAnswer {
    /// The decision.
    pub decision: ApprovalDecision,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_camel_case() {
        let page: Page<serde_json::Value> = serde_json::from_value(json!({
            "size": 2,
            "start": 0,
            "limit": 2,
            "isLastPage": false,
            "values": [{"id": "1"}, {"id": "2"}]
        }))
        .unwrap();

        assert_eq!(page.values.len(), 2);
        assert_eq!(page.next_page(), Some(Pagination::new(2, 2)));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let page: Page<serde_json::Value> =
            serde_json::from_value(json!({"size": 0, "isLastPage": true})).unwrap();
        assert!(page.values.is_empty());
        assert!(page.next_page().is_none());
    }

    #[test]
    fn test_empty_page_without_last_flag_has_no_next() {
        let page: Page<serde_json::Value> =
            serde_json::from_value(json!({"size": 0, "start": 50, "limit": 50, "values": []}))
                .unwrap();
        assert!(!page.is_last_page);
        assert!(page.next_page().is_none());
    }

    #[test]
    fn test_error_response() {
        let err: ErrorResponse =
            serde_json::from_value(json!({"errorMessage": "Issue does not exist"})).unwrap();
        assert_eq!(err.error_message.as_deref(), Some("Issue does not exist"));
    }

    #[test]
    fn test_small_bodies_serialize() {
        assert_eq!(
            serde_json::to_value(Usernames::new(["alice", "bob"])).unwrap(),
            json!({"usernames": ["alice", "bob"]})
        );
        assert_eq!(
            serde_json::to_value(OrganizationRef { organization_id: 7 }).unwrap(),
            json!({"organizationId": 7})
        );
        assert_eq!(
            serde_json::to_value(NewCustomer {
                email: "a@example.com".to_string(),
                display_name: "Alice".to_string(),
            })
            .unwrap(),
            json!({"email": "a@example.com", "displayName": "Alice"})
        );
        assert_eq!(
            serde_json::to_value(ApprovalAnswer {
                decision: ApprovalDecision::Decline
            })
            .unwrap(),
            json!({"decision": "decline"})
        );
    }
}
