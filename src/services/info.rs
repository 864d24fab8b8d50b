use crate::builder::ApiRequest;
use crate::error::ServiceDeskError;
use crate::response::Response;
use crate::service::Service;

/// Runtime information about the Service Desk instance.
#[derive(Clone, Copy)]
pub struct InfoService<'a> {
    service: &'a Service,
}

impl<'a> InfoService<'a> {
    pub(crate) fn new(service: &'a Service) -> Self {
        Self { service }
    }

    /// Returns version and build information. Works without logging in.
    pub async fn get_info(&self) -> Result<Response, ServiceDeskError> {
        self.service.execute(ApiRequest::get("info").build()?).await
    }
}
