use super::global_search_page;
use crate::builder::ApiRequest;
use crate::error::ServiceDeskError;
use crate::models::ArticleQuery;
use crate::response::Response;
use crate::service::Service;

/// Knowledge base search across all service desks.
#[derive(Clone, Copy)]
pub struct KnowledgebaseService<'a> {
    service: &'a Service,
}

impl<'a> KnowledgebaseService<'a> {
    pub(crate) fn new(service: &'a Service) -> Self {
        Self { service }
    }

    /// Returns articles matching the query, 100 per page unless the query
    /// sets a page. Experimental endpoint.
    pub async fn get_articles(&self, query: &ArticleQuery) -> Result<Response, ServiceDeskError> {
        let path = query
            .to_query(global_search_page())
            .append_to("knowledgebase/article");

        self.service
            .execute(ApiRequest::get(path).experimental().build()?)
            .await
    }
}
