use crate::models::Product;

/// Display-ready product; missing nested values already replaced by "N/A".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub category: String,
    pub description: Option<String>,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        ProductRow {
            id: p.id_label(),
            name: p.name.clone(),
            organization: p.organization_label().to_string(),
            category: p.category_label().to_string(),
            description: p.category_description().map(str::to_string),
        }
    }
}

pub fn product_rows(products: &[Product]) -> Vec<ProductRow> {
    products.iter().map(ProductRow::from).collect()
}
