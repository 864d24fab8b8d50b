use super::{segment, to_body};
use crate::builder::ApiRequest;
use crate::error::ServiceDeskError;
use crate::models::{
    ApprovalAnswer, ApprovalDecision, AttachmentModel, CommentQuery, CustomerRequest,
    CustomerRequestQuery, NewComment, TransitionModel, Usernames,
};
use crate::query::{Pagination, Query};
use crate::response::Response;
use crate::service::Service;

/// Customer requests and everything hanging off them: approvals,
/// attachments, comments, notifications, participants, SLAs, statuses and
/// transitions.
///
/// `issue` is always an issue ID or key such as `"SD-42"`.
#[derive(Clone, Copy)]
pub struct RequestService<'a> {
    service: &'a Service,
}

impl<'a> RequestService<'a> {
    pub(crate) fn new(service: &'a Service) -> Self {
        Self { service }
    }

    async fn get(&self, path: String) -> Result<Response, ServiceDeskError> {
        self.service.execute(ApiRequest::get(path).build()?).await
    }

    async fn get_paged(
        &self,
        issue: &str,
        resource: &str,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .page(page)
            .append_to(&format!("request/{}/{}", segment(issue), resource));
        self.get(path).await
    }

    /// Lists the caller's customer requests, most recently active first.
    pub async fn get_customer_requests(
        &self,
        query: &CustomerRequestQuery,
    ) -> Result<Response, ServiceDeskError> {
        self.get(query.to_query().append_to("request")).await
    }

    /// Creates a customer request.
    pub async fn create_customer_request(
        &self,
        request: &CustomerRequest,
    ) -> Result<Response, ServiceDeskError> {
        let body = to_body(request)?;
        self.service
            .execute(ApiRequest::post("request").json(body).build()?)
            .await
    }

    /// Returns one customer request.
    pub async fn get_customer_request(
        &self,
        issue: &str,
        expand: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .list("expand", expand)
            .append_to(&format!("request/{}", segment(issue)));
        self.get(path).await
    }

    /// Lists approvals on a request.
    pub async fn get_approvals(
        &self,
        issue: &str,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        self.get_paged(issue, "approval", page).await
    }

    /// Returns one approval with its approvers.
    pub async fn get_approval(
        &self,
        issue: &str,
        approval_id: u64,
    ) -> Result<Response, ServiceDeskError> {
        self.get(format!("request/{}/approval/{}", segment(issue), approval_id))
            .await
    }

    /// Approves or declines an approval owned by the caller.
    pub async fn answer_approval(
        &self,
        issue: &str,
        approval_id: u64,
        decision: ApprovalDecision,
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("request/{}/approval/{}", segment(issue), approval_id);
        let body = to_body(&ApprovalAnswer { decision })?;
        self.service
            .execute(ApiRequest::post(path).json(body).build()?)
            .await
    }

    /// Lists attachments on a request.
    pub async fn get_attachments(
        &self,
        issue: &str,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        self.get_paged(issue, "attachment", page).await
    }

    /// Attaches temporary files (see
    /// [`ServiceDeskService::attach_temporary_file`](crate::services::ServiceDeskService::attach_temporary_file))
    /// to a request.
    pub async fn create_attachment(
        &self,
        issue: &str,
        attachment: &AttachmentModel,
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("request/{}/attachment", segment(issue));
        let body = to_body(attachment)?;
        self.service
            .execute(ApiRequest::post(path).json(body).build()?)
            .await
    }

    /// Lists comments on a request. Jira returns an empty list rather than a
    /// permission error when the caller cannot see the request.
    pub async fn get_comments(
        &self,
        issue: &str,
        query: &CommentQuery,
    ) -> Result<Response, ServiceDeskError> {
        let path = query
            .to_query()
            .append_to(&format!("request/{}/comment", segment(issue)));
        self.get(path).await
    }

    /// Adds a public or internal comment authored by the caller.
    pub async fn create_comment(
        &self,
        issue: &str,
        body: &str,
        public: bool,
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("request/{}/comment", segment(issue));
        let body = to_body(&NewComment {
            body: body.to_string(),
            public,
        })?;
        self.service
            .execute(ApiRequest::post(path).json(body).build()?)
            .await
    }

    /// Returns one comment.
    pub async fn get_comment(
        &self,
        issue: &str,
        comment_id: u64,
        expand: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .list("expand", expand)
            .append_to(&format!("request/{}/comment/{}", segment(issue), comment_id));
        self.get(path).await
    }

    /// Lists attachments referenced by a comment. Experimental endpoint.
    pub async fn get_comment_attachments(
        &self,
        issue: &str,
        comment_id: u64,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new().page(page).append_to(&format!(
            "request/{}/comment/{}/attachment",
            segment(issue),
            comment_id
        ));
        self.service
            .execute(ApiRequest::get(path).experimental().build()?)
            .await
    }

    /// Returns whether the caller is subscribed to notifications.
    pub async fn get_subscription_status(&self, issue: &str) -> Result<Response, ServiceDeskError> {
        self.get(format!("request/{}/notification", segment(issue)))
            .await
    }

    /// Subscribes the caller to notifications.
    pub async fn subscribe(&self, issue: &str) -> Result<Response, ServiceDeskError> {
        let path = format!("request/{}/notification", segment(issue));
        self.service.execute(ApiRequest::put(path).build()?).await
    }

    /// Unsubscribes the caller from notifications.
    pub async fn unsubscribe(&self, issue: &str) -> Result<Response, ServiceDeskError> {
        let path = format!("request/{}/notification", segment(issue));
        self.service.execute(ApiRequest::delete(path).build()?).await
    }

    /// Lists participants.
    pub async fn get_participants(
        &self,
        issue: &str,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        self.get_paged(issue, "participant", page).await
    }

    /// Adds participants by username.
    pub async fn add_participants(
        &self,
        issue: &str,
        usernames: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("request/{}/participant", segment(issue));
        let body = to_body(&Usernames::new(usernames.iter().copied()))?;
        self.service
            .execute(ApiRequest::post(path).json(body).build()?)
            .await
    }

    /// Removes participants by username.
    pub async fn remove_participants(
        &self,
        issue: &str,
        usernames: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("request/{}/participant", segment(issue));
        let body = to_body(&Usernames::new(usernames.iter().copied()))?;
        self.service
            .execute(ApiRequest::delete(path).json(body).build()?)
            .await
    }

    /// Lists SLA records with their completed and ongoing cycles.
    pub async fn get_sla_information(
        &self,
        issue: &str,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        self.get_paged(issue, "sla", page).await
    }

    /// Returns one SLA metric.
    pub async fn get_sla_information_by_id(
        &self,
        issue: &str,
        sla_metric_id: u64,
    ) -> Result<Response, ServiceDeskError> {
        self.get(format!("request/{}/sla/{}", segment(issue), sla_metric_id))
            .await
    }

    /// Lists the status history, most recent first.
    pub async fn get_status(
        &self,
        issue: &str,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        self.get_paged(issue, "status", page).await
    }

    /// Lists the transitions the caller can perform.
    pub async fn get_transitions(
        &self,
        issue: &str,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        self.get_paged(issue, "transition", page).await
    }

    /// Performs a customer transition, optionally with a comment.
    pub async fn perform_transition(
        &self,
        issue: &str,
        transition: &TransitionModel,
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("request/{}/transition", segment(issue));
        let body = to_body(transition)?;
        self.service
            .execute(ApiRequest::post(path).json(body).build()?)
            .await
    }
}
