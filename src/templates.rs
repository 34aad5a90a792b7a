use askama::Template;

use crate::models::{Category, CatalogCounts, Organization, ProductRow, SelectOption};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub active: &'static str,
    pub api_base_url: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub counts: CatalogCounts,
}

#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsPageTemplate {
    pub active: &'static str,
    pub api_base_url: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub products: Vec<ProductRow>,
    pub total: usize,
    pub search: String,
    pub organization_options: Vec<SelectOption>,
    pub category_options: Vec<SelectOption>,
    pub sort_options: Vec<SelectOption>,
    pub order_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "organizations.html")]
pub struct OrganizationsPageTemplate<'a> {
    pub active: &'static str,
    pub api_base_url: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub organizations: &'a [Organization],
    pub search: String,
}

#[derive(Template)]
#[template(path = "categories.html")]
pub struct CategoriesPageTemplate<'a> {
    pub active: &'static str,
    pub api_base_url: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub categories: &'a [Category],
    pub search: String,
}

#[derive(Template)]
#[template(path = "soap_products.html")]
pub struct SoapProductsPageTemplate {
    pub active: &'static str,
    pub api_base_url: String,
    pub notice: Option<String>,
    pub error: Option<String>,
    pub soap_base_url: String,
    pub products: Vec<ProductRow>,
    pub search: String,
    pub raw_response: Option<String>,
    pub organization_options: Vec<SelectOption>,
    pub category_options: Vec<SelectOption>,
}
