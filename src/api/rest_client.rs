use crate::catalog::CatalogBackend;
use crate::error::CatalogError;
use crate::models::{Category, NewCategory, NewOrganization, NewProduct, Organization, Product};

use super::{categories, organizations, products};

/// REST transport bound to one base URL.
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    api_base_url: String,
}

impl RestClient {
    pub fn new(client: reqwest::Client, api_base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_base_url: api_base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl CatalogBackend for RestClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        products::load_products(&self.client, &self.api_base_url).await
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>, CatalogError> {
        organizations::load_organizations(&self.client, &self.api_base_url).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        categories::load_categories(&self.client, &self.api_base_url).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, CatalogError> {
        products::create_product(&self.client, &self.api_base_url, product).await
    }

    async fn create_organization(&self, organization: &NewOrganization) -> Result<Organization, CatalogError> {
        organizations::create_organization(&self.client, &self.api_base_url, organization).await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, CatalogError> {
        categories::create_category(&self.client, &self.api_base_url, category).await
    }
}
