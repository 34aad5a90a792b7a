use serde::{Deserialize, Serialize};

/// Placeholder shown for nested fields the backend left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// Organization embedded by value inside a product; any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Category embedded by value inside a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub organization: Option<OrganizationRef>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl Product {
    pub fn organization_id(&self) -> Option<i64> {
        self.organization.as_ref().and_then(|o| o.id)
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category.as_ref().and_then(|c| c.id)
    }

    /// Organization name, or `None` when the product has no (named) organization.
    pub fn organization_name(&self) -> Option<&str> {
        self.organization.as_ref().and_then(|o| o.name.as_deref())
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn category_description(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(|c| c.description.as_deref())
            .filter(|d| !d.is_empty())
    }

    pub fn id_label(&self) -> String {
        match self.id {
            Some(id) => format!("#{}", id),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn organization_label(&self) -> &str {
        self.organization_name().unwrap_or(NOT_AVAILABLE)
    }

    pub fn category_label(&self) -> &str {
        self.category_name().unwrap_or(NOT_AVAILABLE)
    }
}
