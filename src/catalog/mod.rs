//! Catalog view-model
//!
//! Holds the products/organizations/categories fetched from the backend and
//! derives the visible product list from the current query (free-text
//! search, organization/category filter, sort). Every presentation shell of
//! the crate goes through this module.

pub mod search;
pub mod filter;
pub mod sort;
pub mod view_model;

use std::future::Future;

use crate::error::CatalogError;
use crate::models::{Category, NewCategory, NewOrganization, NewProduct, Organization, Product};

pub use search::{filter_items, nested_value, CATEGORY_SEARCH_FIELDS, ORGANIZATION_SEARCH_FIELDS, PRODUCT_SEARCH_FIELDS};
pub use filter::ProductQuery;
pub use sort::{sort_products, SortKey, SortOrder};
pub use view_model::{fetch_snapshot, CatalogViewModel, FetchToken};

/// Source of catalog data. Implemented by the REST adapter; tests use in-memory fakes.
pub trait CatalogBackend: Send + Sync {
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;
    fn list_organizations(&self) -> impl Future<Output = Result<Vec<Organization>, CatalogError>> + Send;
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, CatalogError>> + Send;
    fn create_product(&self, product: &NewProduct) -> impl Future<Output = Result<Product, CatalogError>> + Send;
    fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> impl Future<Output = Result<Organization, CatalogError>> + Send;
    fn create_category(&self, category: &NewCategory) -> impl Future<Output = Result<Category, CatalogError>> + Send;
}
