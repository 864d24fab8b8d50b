use std::path::Path;

use serde_json::Value;

use super::{segment, to_body};
use crate::builder::{
    ApiRequest, MultipartField, ATLASSIAN_TOKEN_HEADER, ATLASSIAN_TOKEN_NO_CHECK,
};
use crate::error::ServiceDeskError;
use crate::models::{ArticleQuery, OrganizationRef, RequestTypeModel, RequestTypeQuery, Usernames};
use crate::query::{Pagination, Query};
use crate::response::Response;
use crate::service::Service;

/// Multipart field name Jira expects for uploads.
const UPLOAD_FIELD_NAME: &str = "file";

/// Service desks and their customers, organizations, queues, request types
/// and temporary attachments.
#[derive(Clone, Copy)]
pub struct ServiceDeskService<'a> {
    service: &'a Service,
}

impl<'a> ServiceDeskService<'a> {
    pub(crate) fn new(service: &'a Service) -> Self {
        Self { service }
    }

    async fn get(&self, path: String) -> Result<Response, ServiceDeskError> {
        self.service.execute(ApiRequest::get(path).build()?).await
    }

    fn desk_path(service_desk_id: u64, rest: &str) -> String {
        if rest.is_empty() {
            format!("servicedesk/{}", service_desk_id)
        } else {
            format!("servicedesk/{}/{}", service_desk_id, rest)
        }
    }

    fn request_type_path(service_desk_id: u64, request_type_id: u64, rest: &str) -> String {
        let base = Self::desk_path(service_desk_id, &format!("requesttype/{}", request_type_id));
        if rest.is_empty() {
            base
        } else {
            format!("{}/{}", base, rest)
        }
    }

    /// Lists the service desks the caller can access.
    pub async fn get_service_desks(&self, page: Pagination) -> Result<Response, ServiceDeskError> {
        self.get(Query::new().page(page).append_to("servicedesk"))
            .await
    }

    /// Returns one service desk.
    pub async fn get_service_desk(&self, service_desk_id: u64) -> Result<Response, ServiceDeskError> {
        self.get(Self::desk_path(service_desk_id, "")).await
    }

    /// Uploads a temporary file that can later be attached to a request
    /// with [`RequestService::create_attachment`](crate::services::RequestService::create_attachment).
    ///
    /// Sent as `multipart/form-data` with a single `file` field and the
    /// XSRF bypass header.
    pub async fn attach_temporary_file(
        &self,
        service_desk_id: u64,
        contents: impl Into<Vec<u8>>,
        filename: &str,
    ) -> Result<Response, ServiceDeskError> {
        let field = MultipartField::new(UPLOAD_FIELD_NAME, contents).with_filename(filename);
        self.upload(service_desk_id, field).await
    }

    /// Like [`attach_temporary_file`](Self::attach_temporary_file), reading
    /// the contents and file name from disk.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::Io` if the file cannot be read.
    pub async fn attach_temporary_file_from_path(
        &self,
        service_desk_id: u64,
        path: impl AsRef<Path>,
    ) -> Result<Response, ServiceDeskError> {
        let field = MultipartField::from_path(UPLOAD_FIELD_NAME, path).await?;
        self.upload(service_desk_id, field).await
    }

    async fn upload(
        &self,
        service_desk_id: u64,
        field: MultipartField,
    ) -> Result<Response, ServiceDeskError> {
        let request = ApiRequest::post(Self::desk_path(service_desk_id, "attachTemporaryFile"))
            .experimental()
            .header(ATLASSIAN_TOKEN_HEADER, ATLASSIAN_TOKEN_NO_CHECK)
            .multipart(vec![field])
            .build()?;
        self.service.execute(request).await
    }

    /// Lists customers of a service desk, filtered by `query`. Experimental
    /// endpoint.
    pub async fn get_customers(
        &self,
        service_desk_id: u64,
        query: &str,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .param("query", query)
            .page(page)
            .append_to(&Self::desk_path(service_desk_id, "customer"));
        self.service
            .execute(ApiRequest::get(path).experimental().build()?)
            .await
    }

    /// Adds customers to a service desk. Customers already present are left
    /// alone. Experimental endpoint.
    pub async fn add_customers(
        &self,
        service_desk_id: u64,
        usernames: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let body = to_body(&Usernames::new(usernames.iter().copied()))?;
        let request = ApiRequest::post(Self::desk_path(service_desk_id, "customer"))
            .experimental()
            .json(body)
            .build()?;
        self.service.execute(request).await
    }

    /// Removes customers from a service desk with closed access.
    /// Experimental endpoint.
    pub async fn remove_customers(
        &self,
        service_desk_id: u64,
        usernames: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let body = to_body(&Usernames::new(usernames.iter().copied()))?;
        let request = ApiRequest::delete(Self::desk_path(service_desk_id, "customer"))
            .experimental()
            .json(body)
            .build()?;
        self.service.execute(request).await
    }

    /// Searches the knowledge base linked to a service desk, 50 per page
    /// unless the query sets a page. Experimental endpoint.
    pub async fn get_articles(
        &self,
        service_desk_id: u64,
        query: &ArticleQuery,
    ) -> Result<Response, ServiceDeskError> {
        let path = query
            .to_query(Pagination::default())
            .append_to(&Self::desk_path(service_desk_id, "knowledgebase/article"));
        self.service
            .execute(ApiRequest::get(path).experimental().build()?)
            .await
    }

    /// Lists organizations associated with a service desk.
    pub async fn get_organizations(
        &self,
        service_desk_id: u64,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .page(page)
            .append_to(&Self::desk_path(service_desk_id, "organization"));
        self.get(path).await
    }

    /// Associates an organization with a service desk.
    pub async fn add_organization(
        &self,
        service_desk_id: u64,
        organization_id: u64,
    ) -> Result<Response, ServiceDeskError> {
        let body = to_body(&OrganizationRef { organization_id })?;
        let request = ApiRequest::post(Self::desk_path(service_desk_id, "organization"))
            .json(body)
            .build()?;
        self.service.execute(request).await
    }

    /// Removes an organization from a service desk.
    pub async fn remove_organization(
        &self,
        service_desk_id: u64,
        organization_id: u64,
    ) -> Result<Response, ServiceDeskError> {
        let body = to_body(&OrganizationRef { organization_id })?;
        let request = ApiRequest::delete(Self::desk_path(service_desk_id, "organization"))
            .json(body)
            .build()?;
        self.service.execute(request).await
    }

    /// Lists queues, optionally with an issue count per queue.
    pub async fn get_queues(
        &self,
        service_desk_id: u64,
        include_count: bool,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .page(page)
            .param("includeCount", include_count)
            .append_to(&Self::desk_path(service_desk_id, "queue"));
        self.get(path).await
    }

    /// Lists the customer requests in a queue, limited to the fields the
    /// queue is configured to show.
    pub async fn get_issues_in_queue(
        &self,
        service_desk_id: u64,
        queue_id: u64,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new().page(page).append_to(&Self::desk_path(
            service_desk_id,
            &format!("queue/{}/issue", queue_id),
        ));
        self.get(path).await
    }

    /// Lists the request types of a service desk, 50 per page unless the
    /// query sets a page.
    pub async fn get_request_types(
        &self,
        service_desk_id: u64,
        query: &RequestTypeQuery,
    ) -> Result<Response, ServiceDeskError> {
        let path = query
            .to_query(Pagination::default())
            .append_to(&Self::desk_path(service_desk_id, "requesttype"));
        self.get(path).await
    }

    /// Creates a request type from an issue type. Experimental endpoint.
    pub async fn create_request_type(
        &self,
        service_desk_id: u64,
        request_type: &RequestTypeModel,
    ) -> Result<Response, ServiceDeskError> {
        let body = to_body(request_type)?;
        let request = ApiRequest::post(Self::desk_path(service_desk_id, "requesttype"))
            .experimental()
            .json(body)
            .build()?;
        self.service.execute(request).await
    }

    /// Returns one request type.
    pub async fn get_request_type(
        &self,
        service_desk_id: u64,
        request_type_id: u64,
        expand: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .list("expand", expand)
            .append_to(&Self::request_type_path(service_desk_id, request_type_id, ""));
        self.get(path).await
    }

    /// Returns the fields of a request type and the caller's permissions on
    /// it (`canRaiseOnBehalfOf`, `canAddRequestParticipants`).
    pub async fn get_request_type_fields(
        &self,
        service_desk_id: u64,
        request_type_id: u64,
    ) -> Result<Response, ServiceDeskError> {
        self.get(Self::request_type_path(service_desk_id, request_type_id, "field"))
            .await
    }

    /// Lists property keys of a request type. Experimental endpoint.
    pub async fn get_request_type_properties_keys(
        &self,
        service_desk_id: u64,
        request_type_id: u64,
    ) -> Result<Response, ServiceDeskError> {
        let path = Self::request_type_path(service_desk_id, request_type_id, "property");
        self.service
            .execute(ApiRequest::get(path).experimental().build()?)
            .await
    }

    /// Returns one request type property. Experimental endpoint.
    pub async fn get_request_type_property(
        &self,
        service_desk_id: u64,
        request_type_id: u64,
        property_key: &str,
    ) -> Result<Response, ServiceDeskError> {
        let path = Self::property_path(service_desk_id, request_type_id, property_key);
        self.service
            .execute(ApiRequest::get(path).experimental().build()?)
            .await
    }

    /// Stores arbitrary JSON on a request type. Experimental endpoint.
    pub async fn set_request_type_property(
        &self,
        service_desk_id: u64,
        request_type_id: u64,
        property_key: &str,
        value: Value,
    ) -> Result<Response, ServiceDeskError> {
        let path = Self::property_path(service_desk_id, request_type_id, property_key);
        self.service
            .execute(ApiRequest::put(path).experimental().json(value).build()?)
            .await
    }

    /// Removes a request type property. Experimental endpoint.
    pub async fn delete_request_type_property(
        &self,
        service_desk_id: u64,
        request_type_id: u64,
        property_key: &str,
    ) -> Result<Response, ServiceDeskError> {
        let path = Self::property_path(service_desk_id, request_type_id, property_key);
        self.service
            .execute(ApiRequest::delete(path).experimental().build()?)
            .await
    }

    /// Lists request type groups in portal display order.
    pub async fn get_request_type_groups(
        &self,
        service_desk_id: u64,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .page(page)
            .append_to(&Self::desk_path(service_desk_id, "requesttypegroup"));
        self.get(path).await
    }

    fn property_path(service_desk_id: u64, request_type_id: u64, property_key: &str) -> String {
        Self::request_type_path(
            service_desk_id,
            request_type_id,
            &format!("property/{}", segment(property_key)),
        )
    }
}
