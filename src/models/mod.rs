pub mod product;
pub mod organization;
pub mod category;
pub mod catalog_snapshot;
pub mod product_form;
pub mod organization_form;
pub mod category_form;

pub use product::{Product, OrganizationRef, CategoryRef, NOT_AVAILABLE};
pub use organization::Organization;
pub use category::Category;
pub use catalog_snapshot::{CatalogSnapshot, CatalogCounts};
pub use product_form::{ProductForm, NewProduct, IdRef};
pub use organization_form::{OrganizationForm, NewOrganization};
pub use category_form::{CategoryForm, NewCategory};
pub mod app_state;
pub mod product_row;
pub mod select_option;

pub use app_state::AppState;
pub use product_row::{ProductRow, product_rows};
pub use select_option::{SelectOption, organization_options, category_options};
