use crate::models::{Category, Organization, Product};

/// The three lists fetched together; always replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub organizations: Vec<Organization>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub products: usize,
    pub organizations: usize,
    pub categories: usize,
}

impl CatalogSnapshot {
    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            products: self.products.len(),
            organizations: self.organizations.len(),
            categories: self.categories.len(),
        }
    }
}
