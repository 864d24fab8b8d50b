use serde_json::Value;

use super::{segment, to_body};
use crate::builder::ApiRequest;
use crate::error::ServiceDeskError;
use crate::models::{NewOrganization, Usernames};
use crate::query::{Pagination, Query};
use crate::response::Response;
use crate::service::Service;

/// Organizations, their properties and their members.
#[derive(Clone, Copy)]
pub struct OrganizationService<'a> {
    service: &'a Service,
}

impl<'a> OrganizationService<'a> {
    pub(crate) fn new(service: &'a Service) -> Self {
        Self { service }
    }

    /// Lists organizations in the instance.
    pub async fn get_organizations(&self, page: Pagination) -> Result<Response, ServiceDeskError> {
        let path = Query::new().page(page).append_to("organization");
        self.service.execute(ApiRequest::get(path).build()?).await
    }

    /// Creates an organization.
    pub async fn create_organization(&self, name: &str) -> Result<Response, ServiceDeskError> {
        let body = to_body(&NewOrganization {
            name: name.to_string(),
        })?;
        self.service
            .execute(ApiRequest::post("organization").json(body).build()?)
            .await
    }

    /// Returns one organization.
    pub async fn get_organization(&self, organization_id: u64) -> Result<Response, ServiceDeskError> {
        let path = format!("organization/{}", organization_id);
        self.service.execute(ApiRequest::get(path).build()?).await
    }

    /// Deletes an organization regardless of its service desk associations.
    pub async fn delete_organization(
        &self,
        organization_id: u64,
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("organization/{}", organization_id);
        self.service.execute(ApiRequest::delete(path).build()?).await
    }

    /// Lists the property keys stored on an organization.
    pub async fn get_properties_keys(
        &self,
        organization_id: u64,
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("organization/{}/property", organization_id);
        self.service.execute(ApiRequest::get(path).build()?).await
    }

    /// Returns one property value.
    pub async fn get_property(
        &self,
        organization_id: u64,
        property_key: &str,
    ) -> Result<Response, ServiceDeskError> {
        let path = Self::property_path(organization_id, property_key);
        self.service.execute(ApiRequest::get(path).build()?).await
    }

    /// Stores arbitrary JSON under a property key.
    pub async fn set_property(
        &self,
        organization_id: u64,
        property_key: &str,
        value: Value,
    ) -> Result<Response, ServiceDeskError> {
        let path = Self::property_path(organization_id, property_key);
        self.service
            .execute(ApiRequest::put(path).json(value).build()?)
            .await
    }

    /// Removes a property.
    pub async fn delete_property(
        &self,
        organization_id: u64,
        property_key: &str,
    ) -> Result<Response, ServiceDeskError> {
        let path = Self::property_path(organization_id, property_key);
        self.service.execute(ApiRequest::delete(path).build()?).await
    }

    /// Lists the users in an organization.
    pub async fn get_users(
        &self,
        organization_id: u64,
        page: Pagination,
    ) -> Result<Response, ServiceDeskError> {
        let path = Query::new()
            .page(page)
            .append_to(&format!("organization/{}/user", organization_id));
        self.service.execute(ApiRequest::get(path).build()?).await
    }

    /// Adds customers to an organization by username.
    pub async fn add_users(
        &self,
        organization_id: u64,
        usernames: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("organization/{}/user", organization_id);
        let body = to_body(&Usernames::new(usernames.iter().copied()))?;
        self.service
            .execute(ApiRequest::post(path).json(body).build()?)
            .await
    }

    /// Removes customers from an organization by username.
    pub async fn remove_users(
        &self,
        organization_id: u64,
        usernames: &[&str],
    ) -> Result<Response, ServiceDeskError> {
        let path = format!("organization/{}/user", organization_id);
        let body = to_body(&Usernames::new(usernames.iter().copied()))?;
        self.service
            .execute(ApiRequest::delete(path).json(body).build()?)
            .await
    }

    fn property_path(organization_id: u64, property_key: &str) -> String {
        format!(
            "organization/{}/property/{}",
            organization_id,
            segment(property_key)
        )
    }
}
