pub mod helpers;
pub mod dashboard;
pub mod products;
pub mod organizations;
pub mod categories;
pub mod soap_products;

pub use dashboard::dashboard_get;
pub use products::{products_get, products_post};
pub use organizations::{organizations_get, organizations_post};
pub use categories::{categories_get, categories_post};
pub use soap_products::{soap_products_get, soap_products_post};
