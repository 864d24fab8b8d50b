//! SDK entry point.
//!
//! [`JiraServiceDesk`] owns the dispatcher and hands out the endpoint-group
//! services, which borrow it for the duration of a call.

use crate::config::Config;
use crate::error::ServiceDeskError;
use crate::response::Response;
use crate::service::Service;
use crate::services::{
    CustomerService, InfoService, KnowledgebaseService, OrganizationService, RequestService,
    RequestTypeService, ServiceDeskService,
};

/// Client for one Jira Service Desk instance.
///
/// Cloning is cheap and clones share the HTTP connection pool.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let jsd = JiraServiceDesk::new(&config)?;
///
/// let response = jsd.request().get_customer_request("SD-42", &[]).await?;
/// if response.is_success() {
///     println!("{}", response.body().unwrap());
/// }
/// ```
#[derive(Clone)]
pub struct JiraServiceDesk {
    service: Service,
}

impl JiraServiceDesk {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, ServiceDeskError> {
        Ok(Self {
            service: Service::new(config)?,
        })
    }

    /// Replaces the credentials used by subsequent calls.
    pub fn set_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.service.set_credentials(username, password);
    }

    /// The underlying dispatcher, for endpoints not wrapped here.
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Customer endpoints.
    pub fn customer(&self) -> CustomerService<'_> {
        CustomerService::new(&self.service)
    }

    /// Runtime information endpoint.
    pub fn info(&self) -> InfoService<'_> {
        InfoService::new(&self.service)
    }

    /// Knowledge base endpoints.
    pub fn knowledgebase(&self) -> KnowledgebaseService<'_> {
        KnowledgebaseService::new(&self.service)
    }

    /// Organization endpoints.
    pub fn organization(&self) -> OrganizationService<'_> {
        OrganizationService::new(&self.service)
    }

    /// Customer request endpoints.
    pub fn request(&self) -> RequestService<'_> {
        RequestService::new(&self.service)
    }

    /// Request type endpoints.
    pub fn request_type(&self) -> RequestTypeService<'_> {
        RequestTypeService::new(&self.service)
    }

    /// Service desk endpoints.
    pub fn service_desk(&self) -> ServiceDeskService<'_> {
        ServiceDeskService::new(&self.service)
    }

    /// Tests connectivity to the Jira server.
    ///
    /// Calls the `info` endpoint once, checks for a 2xx status and returns
    /// that envelope.
    ///
    /// # Errors
    ///
    /// Returns `ServiceDeskError::ConnectionTest` if the server cannot be
    /// reached or answers with an error status.
    pub async fn test_connection(&self) -> Result<Response, ServiceDeskError> {
        tracing::debug!("Testing connection to Jira Service Desk");

        match self.info().get_info().await {
            Ok(response) if response.is_success() => {
                tracing::info!("Connection test successful");
                Ok(response)
            }
            Ok(response) => Err(ServiceDeskError::connection_test(format!(
                "server answered {} {} - verify JSD_HOST points at a Service Desk instance",
                response.status(),
                response.message()
            ))),
            Err(ServiceDeskError::Timeout { duration, .. }) => {
                Err(ServiceDeskError::connection_test(format!(
                    "Connection timed out after {:?} - verify JSD_HOST is correct and server is reachable",
                    duration
                )))
            }
            Err(e) => Err(ServiceDeskError::connection_test(e.to_string())),
        }
    }
}
