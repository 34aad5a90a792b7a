use axum::{
    extract::{Form, Query, State},
    response::IntoResponse,
};

use crate::catalog::{fetch_snapshot, filter_items, PRODUCT_SEARCH_FIELDS};
use crate::error::CatalogError;
use crate::models::{category_options, organization_options, product_rows, AppState, CatalogSnapshot, Product};
use crate::soap::{check_fault, normalize_products, SoapProductInput};
use crate::templates::SoapProductsPageTemplate;

use super::helpers::{build_template_globals, load_error, redirect_after, render_template, ListParams, TemplateGlobals};
use super::products::ProductFormInput;

pub async fn soap_products_get(State(state): State<AppState>, Query(params): Query<ListParams>) -> impl IntoResponse {
    let TemplateGlobals { api_base_url, notice, mut error } = build_template_globals(&state, &params);
    let search = params.search();

    // Select boxes come from REST; the product list itself comes from SOAP.
    let lookups = match fetch_snapshot(&state.api).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error = load_error(error, &e);
            CatalogSnapshot::default()
        }
    };

    let mut raw_response = None;
    let products: Vec<Product> = match state.soap.list_products().await {
        Ok(doc) => {
            raw_response = Some(doc.source().to_string());
            match normalize_products(&doc) {
                Ok(list) => filter_items(&list, search.trim(), PRODUCT_SEARCH_FIELDS),
                Err(e) => {
                    error = load_error(error, &e);
                    Vec::new()
                }
            }
        }
        Err(e) => {
            error = load_error(error, &e);
            Vec::new()
        }
    };

    render_template(SoapProductsPageTemplate {
        active: "soap",
        api_base_url,
        notice,
        error,
        soap_base_url: state.soap_base_url.clone(),
        products: product_rows(&products),
        search,
        raw_response,
        organization_options: organization_options(&lookups.organizations, None),
        category_options: category_options(&lookups.categories, None),
    })
}

pub async fn soap_products_post(State(state): State<AppState>, Form(input): Form<ProductFormInput>) -> impl IntoResponse {
    let outcome = async {
        let body = input.to_form().validate()?;
        let doc = state
            .soap
            .create_product(&SoapProductInput::from(&body))
            .await?;
        check_fault(&doc)?;
        Ok::<_, CatalogError>(format!("Product \"{}\" created via SOAP", body.name))
    }
    .await;
    redirect_after("/soap-products", outcome)
}
