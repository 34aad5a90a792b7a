// Atomic API modules
pub mod client;
pub mod products;
pub mod organizations;
pub mod categories;
pub mod rest_client;

// Re-export commonly used functions
pub use client::{api_call, set_silent, Method};
pub use products::{load_products, create_product};
pub use organizations::{load_organizations, create_organization};
pub use categories::{load_categories, create_category};
pub use rest_client::RestClient;
