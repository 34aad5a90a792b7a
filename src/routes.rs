use axum::{
    http::{header::CACHE_CONTROL, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    let static_routes = Router::new()
        .route(
            "/static/styles.css",
            get(|| async { ([(axum::http::header::CONTENT_TYPE, "text/css")], DEFAULT_STYLESHEET) }),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .route("/", get(handlers::dashboard_get))
        .route("/products", get(handlers::products_get).post(handlers::products_post))
        .route("/organizations", get(handlers::organizations_get).post(handlers::organizations_post))
        .route("/categories", get(handlers::categories_get).post(handlers::categories_post))
        .route("/soap-products", get(handlers::soap_products_get).post(handlers::soap_products_post))
        .merge(static_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers([axum::http::header::CONTENT_TYPE]),
                ),
        )
        .with_state(state)
}
