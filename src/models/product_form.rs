use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// `{"id": ..}` reference used in create bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: i64,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub organization: IdRef,
    pub category: IdRef,
}

/// Raw create-product input as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl ProductForm {
    /// All three fields are required.
    pub fn validate(&self) -> Result<NewProduct, CatalogError> {
        let name = self.name.trim();
        match (name.is_empty(), self.organization_id, self.category_id) {
            (false, Some(org), Some(cat)) => Ok(NewProduct {
                name: name.to_string(),
                organization: IdRef { id: org },
                category: IdRef { id: cat },
            }),
            _ => Err(CatalogError::Validation("Please fill in all fields".into())),
        }
    }
}
