use crate::error::CatalogError;
use crate::models::{NewProduct, Product};
use super::client::{api_call_typed, Method};

/// Load all products with their embedded organization and category.
pub async fn load_products(client: &reqwest::Client, api_base_url: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = api_call_typed::<(), _>(client, api_base_url, Method::Get, "/products", None).await?;
    tracing::debug!("Loaded {} products", products.len());
    Ok(products)
}

/// Create a product. The response echoes the stored record; callers that need
/// the resolved organization/category names should reload the list.
pub async fn create_product(
    client: &reqwest::Client,
    api_base_url: &str,
    product: &NewProduct,
) -> Result<Product, CatalogError> {
    let created: Product = api_call_typed(client, api_base_url, Method::Post, "/products", Some(product)).await?;
    tracing::info!(name = %created.name, "Product created");
    Ok(created)
}
