use axum::{
    extract::{Form, Query, State},
    response::IntoResponse,
};

use crate::error::CatalogError;
use crate::catalog::{CatalogBackend, CatalogViewModel};
use crate::models::{AppState, CategoryForm};
use crate::templates::CategoriesPageTemplate;

use super::helpers::{build_template_globals, load_error, redirect_after, render_template, ListParams, TemplateGlobals};

pub async fn categories_get(State(state): State<AppState>, Query(params): Query<ListParams>) -> impl IntoResponse {
    let TemplateGlobals { api_base_url, notice, mut error } = build_template_globals(&state, &params);
    let mut vm = CatalogViewModel::new();
    if let Err(e) = vm.refresh(&state.api).await {
        error = load_error(error, &e);
    }
    let search = params.search();
    let categories = vm.search_categories(&search);
    render_template(CategoriesPageTemplate {
        active: "categories",
        api_base_url,
        notice,
        error,
        categories: &categories,
        search,
    })
}

pub async fn categories_post(State(state): State<AppState>, Form(form): Form<CategoryForm>) -> impl IntoResponse {
    let outcome = async {
        let body = form.validate()?;
        let created = state.api.create_category(&body).await?;
        Ok::<_, CatalogError>(format!("Category \"{}\" created", created.name))
    }
    .await;
    redirect_after("/categories", outcome)
}
