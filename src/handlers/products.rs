use axum::{
    extract::{Form, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::catalog::{CatalogBackend, CatalogViewModel, ProductQuery, SortKey, SortOrder};
use crate::models::{category_options, organization_options, product_rows, AppState, ProductForm, SelectOption};
use crate::templates::ProductsPageTemplate;
use crate::utils::parse_optional_id;

use super::helpers::{build_template_globals, load_error, redirect_after, render_template, ListParams, TemplateGlobals};

/// Create form as posted by the browser; ids arrive as (possibly empty) strings.
#[derive(Deserialize, Debug, Default)]
pub struct ProductFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub category_id: String,
}

impl ProductFormInput {
    pub fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            organization_id: parse_optional_id(Some(&self.organization_id)),
            category_id: parse_optional_id(Some(&self.category_id)),
        }
    }
}

pub fn query_from_params(params: &ListParams) -> ProductQuery {
    ProductQuery {
        search: params.search(),
        organization_id: parse_optional_id(params.organization.as_deref()),
        category_id: parse_optional_id(params.category.as_deref()),
        sort_by: SortKey::parse_lenient(params.sort.as_deref().unwrap_or_default()),
        order: SortOrder::parse_lenient(params.order.as_deref().unwrap_or_default()),
    }
}

fn sort_options(selected: SortKey) -> Vec<SelectOption> {
    [(SortKey::Name, "Name"), (SortKey::Organization, "Organization"), (SortKey::Category, "Category")]
        .into_iter()
        .map(|(key, label)| SelectOption {
            value: key.as_str().to_string(),
            label: format!("Sort by {}", label),
            selected: key == selected,
        })
        .collect()
}

fn order_options(selected: SortOrder) -> Vec<SelectOption> {
    [(SortOrder::Asc, "Ascending"), (SortOrder::Desc, "Descending")]
        .into_iter()
        .map(|(order, label)| SelectOption {
            value: order.as_str().to_string(),
            label: label.to_string(),
            selected: order == selected,
        })
        .collect()
}

pub async fn products_get(State(state): State<AppState>, Query(params): Query<ListParams>) -> impl IntoResponse {
    let TemplateGlobals { api_base_url, notice, mut error } = build_template_globals(&state, &params);
    let mut vm = CatalogViewModel::new();
    if let Err(e) = vm.refresh(&state.api).await {
        error = load_error(error, &e);
    }
    *vm.query_mut() = query_from_params(&params);

    let query = vm.query().clone();
    let snapshot = vm.snapshot();
    render_template(ProductsPageTemplate {
        active: "products",
        api_base_url,
        notice,
        error,
        products: product_rows(&vm.visible_products()),
        total: snapshot.products.len(),
        search: query.search.clone(),
        organization_options: organization_options(&snapshot.organizations, query.organization_id),
        category_options: category_options(&snapshot.categories, query.category_id),
        sort_options: sort_options(query.sort_by),
        order_options: order_options(query.order),
    })
}

pub async fn products_post(State(state): State<AppState>, Form(input): Form<ProductFormInput>) -> impl IntoResponse {
    let outcome = async {
        let body = input.to_form().validate()?;
        let created = state.api.create_product(&body).await?;
        Ok::<_, CatalogError>(format!("Product \"{}\" created", created.name))
    }
    .await;
    redirect_after("/products", outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_params() {
        let params = ListParams {
            q: Some("lamp".into()),
            organization: Some("3".into()),
            category: Some("".into()),
            sort: Some("category".into()),
            order: Some("desc".into()),
            ..Default::default()
        };
        let q = query_from_params(&params);
        assert_eq!(q.search, "lamp");
        assert_eq!(q.organization_id, Some(3));
        assert_eq!(q.category_id, None);
        assert_eq!(q.sort_by, SortKey::Category);
        assert_eq!(q.order, SortOrder::Desc);
    }

    #[test]
    fn test_empty_select_is_a_validation_error() {
        let input = ProductFormInput { name: "Lamp".into(), organization_id: "".into(), category_id: "2".into() };
        assert!(input.to_form().validate().is_err());
    }
}
