//! Customer request bodies.
//!
//! Builders for the JSON sent when creating a customer request, attaching
//! temporary files to it, or transitioning it.

use serde::Serialize;
use serde_json::{Map, Value};

/// Field key for the request summary.
pub const FIELD_SUMMARY: &str = "summary";
/// Field key for the request description.
pub const FIELD_DESCRIPTION: &str = "description";
/// Field key for the due date.
pub const FIELD_DUE_DATE: &str = "duedate";
/// Field key for labels.
pub const FIELD_LABELS: &str = "labels";
/// Field key for components.
pub const FIELD_COMPONENTS: &str = "components";

/// Body for creating a customer request.
///
/// `requestFieldValues` maps Jira field IDs to values; the required set
/// depends on the request type.
///
/// # Example
///
/// ```ignore
/// let request = CustomerRequest::new("10", "25")
///     .with_summary("Printer on fire")
///     .with_description("Third floor, next to the kitchen")
///     .add_label("hardware");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    /// Service desk the request is raised in.
    pub service_desk_id: String,

    /// Customer request type.
    pub request_type_id: String,

    /// Field values keyed by Jira field ID.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub request_field_values: Map<String, Value>,

    /// Extra participants, by username.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub request_participants: Vec<String>,

    /// Customer the request is raised for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_on_behalf_of: Option<String>,

    /// Channel the request came in through (e.g. "api").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl CustomerRequest {
    /// Starts a request for a service desk and request type.
    pub fn new(service_desk_id: impl Into<String>, request_type_id: impl Into<String>) -> Self {
        Self {
            service_desk_id: service_desk_id.into(),
            request_type_id: request_type_id.into(),
            ..Default::default()
        }
    }

    /// Sets the summary field.
    pub fn with_summary(self, summary: impl Into<String>) -> Self {
        self.with_field(FIELD_SUMMARY, Value::String(summary.into()))
    }

    /// Sets the description field.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_field(FIELD_DESCRIPTION, Value::String(description.into()))
    }

    /// Sets the due date (`YYYY-MM-DD`).
    pub fn with_due_date(self, due_date: impl Into<String>) -> Self {
        self.with_field(FIELD_DUE_DATE, Value::String(due_date.into()))
    }

    /// Replaces the labels.
    pub fn with_labels<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels.into_iter().map(|l| Value::String(l.into())).collect();
        self.with_field(FIELD_LABELS, Value::Array(labels))
    }

    /// Appends one label.
    pub fn add_label(self, label: impl Into<String>) -> Self {
        self.push_to_field(FIELD_LABELS, Value::String(label.into()))
    }

    /// Replaces the components with raw component objects.
    pub fn with_components(self, components: Vec<Value>) -> Self {
        self.with_field(FIELD_COMPONENTS, Value::Array(components))
    }

    /// Appends a component reference such as `("name", "Printers")`.
    pub fn add_component(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut component = Map::new();
        component.insert(key.into(), Value::String(value.into()));
        self.push_to_field(FIELD_COMPONENTS, Value::Object(component))
    }

    /// Sets any field, including custom fields (`customfield_10010`).
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.request_field_values.insert(key.into(), value);
        self
    }

    /// Replaces the participants.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request_participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one participant.
    pub fn add_participant(mut self, participant: impl Into<String>) -> Self {
        self.request_participants.push(participant.into());
        self
    }

    /// Raises the request on behalf of another customer.
    pub fn raise_on_behalf_of(mut self, customer: impl Into<String>) -> Self {
        self.raise_on_behalf_of = Some(customer.into());
        self
    }

    /// Sets the channel.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Pushes onto an array field, replacing a non-array value.
    fn push_to_field(mut self, key: &str, item: Value) -> Self {
        match self.request_field_values.get_mut(key) {
            Some(Value::Array(items)) => items.push(item),
            _ => {
                self.request_field_values
                    .insert(key.to_string(), Value::Array(vec![item]));
            }
        }
        self
    }
}

/// `{"body": ...}` comment attached to attachments and transitions.
#[derive(Debug, Clone, Serialize)]
pub struct AdditionalComment {
    /// Comment text.
    pub body: String,
}

/// Body for turning temporary files into request attachments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentModel {
    /// IDs returned by `attachTemporaryFile`.
    pub temporary_attachment_ids: Vec<String>,

    /// Whether customers can see the attachments.
    pub public: bool,

    /// Optional comment posted with the attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_comment: Option<AdditionalComment>,
}

impl Default for AttachmentModel {
    fn default() -> Self {
        Self {
            temporary_attachment_ids: Vec::new(),
            public: true,
            additional_comment: None,
        }
    }
}

impl AttachmentModel {
    /// Creates a public attachment body with no files yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one temporary attachment ID.
    pub fn add_temporary_attachment_id(mut self, id: impl Into<String>) -> Self {
        self.temporary_attachment_ids.push(id.into());
        self
    }

    /// Sets visibility.
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Adds a comment.
    pub fn with_comment(mut self, body: impl Into<String>) -> Self {
        self.additional_comment = Some(AdditionalComment { body: body.into() });
        self
    }
}

/// Body for performing a customer transition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionModel {
    /// Transition ID from `getCustomerTransitions`.
    pub id: String,

    /// Optional reason for the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_comment: Option<AdditionalComment>,
}

impl TransitionModel {
    /// Creates a transition without a comment.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            additional_comment: None,
        }
    }

    /// Adds a comment.
    pub fn with_comment(mut self, body: impl Into<String>) -> Self {
        self.additional_comment = Some(AdditionalComment { body: body.into() });
        self
    }
}
