use super::global_search_page;
use crate::builder::ApiRequest;
use crate::error::ServiceDeskError;
use crate::models::RequestTypeQuery;
use crate::response::Response;
use crate::service::Service;

/// Request types across all service desks.
#[derive(Clone, Copy)]
pub struct RequestTypeService<'a> {
    service: &'a Service,
}

impl<'a> RequestTypeService<'a> {
    pub(crate) fn new(service: &'a Service) -> Self {
        Self { service }
    }

    /// Returns all customer request types, optionally filtered by a search
    /// query matched against name and description. Experimental endpoint.
    ///
    /// Pages hold 100 results unless the query sets a page. `group_id` is
    /// ignored here; it only applies per service desk.
    pub async fn get_request_types(
        &self,
        query: &RequestTypeQuery,
    ) -> Result<Response, ServiceDeskError> {
        let mut query = query.clone();
        query.group_id = None;
        let path = query
            .to_query(global_search_page())
            .append_to("requesttype");

        self.service
            .execute(ApiRequest::get(path).experimental().build()?)
            .await
    }
}
