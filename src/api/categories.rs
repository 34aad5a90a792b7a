use crate::error::CatalogError;
use crate::models::{Category, NewCategory};
use super::client::{api_call_typed, Method};

pub async fn load_categories(client: &reqwest::Client, api_base_url: &str) -> Result<Vec<Category>, CatalogError> {
    let categories: Vec<Category> =
        api_call_typed::<(), _>(client, api_base_url, Method::Get, "/categories", None).await?;
    tracing::debug!("Loaded {} categories", categories.len());
    Ok(categories)
}

pub async fn create_category(
    client: &reqwest::Client,
    api_base_url: &str,
    category: &NewCategory,
) -> Result<Category, CatalogError> {
    let created: Category = api_call_typed(client, api_base_url, Method::Post, "/categories", Some(category)).await?;
    tracing::info!(id = created.id, name = %created.name, "Category created");
    Ok(created)
}
