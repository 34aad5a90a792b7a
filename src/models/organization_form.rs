use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Body of `POST /organizations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationForm {
    #[serde(default)]
    pub name: String,
}

impl OrganizationForm {
    pub fn validate(&self) -> Result<NewOrganization, CatalogError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("Please enter the organization name".into()));
        }
        Ok(NewOrganization { name: name.to_string() })
    }
}
