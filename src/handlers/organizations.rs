use axum::{
    extract::{Form, Query, State},
    response::IntoResponse,
};

use crate::error::CatalogError;
use crate::catalog::{CatalogBackend, CatalogViewModel};
use crate::models::{AppState, OrganizationForm};
use crate::templates::OrganizationsPageTemplate;

use super::helpers::{build_template_globals, load_error, redirect_after, render_template, ListParams, TemplateGlobals};

pub async fn organizations_get(State(state): State<AppState>, Query(params): Query<ListParams>) -> impl IntoResponse {
    let TemplateGlobals { api_base_url, notice, mut error } = build_template_globals(&state, &params);
    let mut vm = CatalogViewModel::new();
    if let Err(e) = vm.refresh(&state.api).await {
        error = load_error(error, &e);
    }
    let search = params.search();
    let organizations = vm.search_organizations(&search);
    render_template(OrganizationsPageTemplate {
        active: "organizations",
        api_base_url,
        notice,
        error,
        organizations: &organizations,
        search,
    })
}

pub async fn organizations_post(
    State(state): State<AppState>,
    Form(form): Form<OrganizationForm>,
) -> impl IntoResponse {
    let outcome = async {
        let body = form.validate()?;
        let created = state.api.create_organization(&body).await?;
        Ok::<_, CatalogError>(format!("Organization \"{}\" created", created.name))
    }
    .await;
    redirect_after("/organizations", outcome)
}
