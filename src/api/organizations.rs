use crate::error::CatalogError;
use crate::models::{NewOrganization, Organization};
use super::client::{api_call_typed, Method};

pub async fn load_organizations(client: &reqwest::Client, api_base_url: &str) -> Result<Vec<Organization>, CatalogError> {
    let organizations: Vec<Organization> =
        api_call_typed::<(), _>(client, api_base_url, Method::Get, "/organizations", None).await?;
    tracing::debug!("Loaded {} organizations", organizations.len());
    Ok(organizations)
}

pub async fn create_organization(
    client: &reqwest::Client,
    api_base_url: &str,
    organization: &NewOrganization,
) -> Result<Organization, CatalogError> {
    let created: Organization =
        api_call_typed(client, api_base_url, Method::Post, "/organizations", Some(organization)).await?;
    tracing::info!(id = created.id, name = %created.name, "Organization created");
    Ok(created)
}
