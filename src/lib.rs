//! Catalog client
//!
//! Consumes the products/organizations/categories REST API and the products
//! SOAP endpoint, and exposes them through a shared view-model used by the
//! command line, the interactive `browse` shell and the web page shell.

pub mod api;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod handlers;
pub mod models;
pub mod output;
pub mod routes;
pub mod shell;
pub mod soap;
pub mod templates;
pub mod utils;

pub use error::CatalogError;
