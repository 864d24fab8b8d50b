//! Request type bodies.

use serde::Serialize;

/// Body for creating a customer request type from a Jira issue type.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTypeModel {
    /// Issue type the request type is based on.
    pub issue_type_id: String,

    /// Name shown on the portal.
    pub name: String,

    /// Description shown on the portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Help text shown on the portal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl RequestTypeModel {
    /// Creates a request type body.
    pub fn new(issue_type_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            issue_type_id: issue_type_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the help text.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_type_model_serializes() {
        let body = serde_json::to_value(
            RequestTypeModel::new("10001", "Get IT help").with_help_text("Ask us anything"),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"issueTypeId": "10001", "name": "Get IT help", "helpText": "Ask us anything"})
        );
    }
}
