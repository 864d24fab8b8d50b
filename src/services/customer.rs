use super::to_body;
use crate::builder::ApiRequest;
use crate::error::ServiceDeskError;
use crate::models::NewCustomer;
use crate::response::Response;
use crate::service::Service;

/// Customer records.
#[derive(Clone, Copy)]
pub struct CustomerService<'a> {
    service: &'a Service,
}

impl<'a> CustomerService<'a> {
    pub(crate) fn new(service: &'a Service) -> Self {
        Self { service }
    }

    /// Creates a customer from an email address and display name.
    ///
    /// Requires the Jira administrator global permission. The customer's
    /// name and key are generated by Jira.
    pub async fn create_customer(
        &self,
        display_name: &str,
        email: &str,
    ) -> Result<Response, ServiceDeskError> {
        let body = to_body(&NewCustomer {
            email: email.to_string(),
            display_name: display_name.to_string(),
        })?;

        self.service
            .execute(ApiRequest::post("customer").json(body).build()?)
            .await
    }
}
