use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::models::AppState;
use crate::utils::build_query_string;

/// Query parameters understood by every list page.
#[derive(Deserialize, Debug, Default)]
pub struct ListParams {
    pub q: Option<String>,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl ListParams {
    pub fn search(&self) -> String {
        self.q.clone().unwrap_or_default()
    }
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub api_base_url: String,
    pub notice: Option<String>,
    pub error: Option<String>,
}

pub fn build_template_globals(state: &AppState, params: &ListParams) -> TemplateGlobals {
    TemplateGlobals {
        api_base_url: state.api_base_url.clone(),
        notice: params.notice.clone().filter(|n| !n.is_empty()),
        error: params.error.clone().filter(|e| !e.is_empty()),
    }
}

/// Error banner text for a failed load; keeps any error passed in the query.
pub fn load_error(existing: Option<String>, e: &CatalogError) -> Option<String> {
    tracing::error!(error = %e, "Failed to load page data");
    Some(existing.unwrap_or_else(|| format!("{} ({})", e.notice(), e)))
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Post/redirect/get: back to the list page with a notice or an error banner.
pub fn redirect_after(path: &str, outcome: Result<String, CatalogError>) -> Response {
    let pairs = match outcome {
        Ok(notice) => vec![("notice", notice)],
        Err(e) => {
            tracing::error!(error = %e, path, "Create failed");
            vec![("error", e.notice())]
        }
    };
    Redirect::to(&format!("{}?{}", path, build_query_string(&pairs))).into_response()
}
