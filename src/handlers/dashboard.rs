use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use crate::catalog::CatalogViewModel;
use crate::models::AppState;
use crate::templates::DashboardTemplate;

use super::helpers::{build_template_globals, load_error, render_template, ListParams, TemplateGlobals};

pub async fn dashboard_get(State(state): State<AppState>, Query(params): Query<ListParams>) -> impl IntoResponse {
    let TemplateGlobals { api_base_url, notice, mut error } = build_template_globals(&state, &params);
    let mut vm = CatalogViewModel::new();
    let counts = match vm.refresh(&state.api).await {
        Ok(counts) => counts,
        Err(e) => {
            error = load_error(error, &e);
            Default::default()
        }
    };
    render_template(DashboardTemplate {
        active: "dashboard",
        api_base_url,
        notice,
        error,
        counts,
    })
}
