use crate::models::Product;

use super::search::{filter_items, PRODUCT_SEARCH_FIELDS};
use super::sort::{sort_products, SortKey, SortOrder};

/// Everything that shapes the visible product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub search: String,
    pub organization_id: Option<i64>,
    pub category_id: Option<i64>,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl ProductQuery {
    pub fn matches_selection(&self, product: &Product) -> bool {
        let org_ok = self.organization_id.map_or(true, |id| product.organization_id() == Some(id));
        let cat_ok = self.category_id.map_or(true, |id| product.category_id() == Some(id));
        org_ok && cat_ok
    }

    pub fn is_default(&self) -> bool {
        *self == ProductQuery::default()
    }

    /// Search, then restrict by selection, then sort.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut out: Vec<Product> = filter_items(products, self.search.trim(), PRODUCT_SEARCH_FIELDS)
            .into_iter()
            .filter(|p| self.matches_selection(p))
            .collect();
        sort_products(&mut out, self.sort_by, self.order);
        out
    }
}
