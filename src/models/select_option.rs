use crate::models::{Category, Organization};

/// One `<option>` of a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub fn organization_options(organizations: &[Organization], selected: Option<i64>) -> Vec<SelectOption> {
    organizations
        .iter()
        .map(|o| SelectOption {
            value: o.id.to_string(),
            label: o.name.clone(),
            selected: selected == Some(o.id),
        })
        .collect()
}

pub fn category_options(categories: &[Category], selected: Option<i64>) -> Vec<SelectOption> {
    categories
        .iter()
        .map(|c| SelectOption {
            value: c.id.to_string(),
            label: c.name.clone(),
            selected: selected == Some(c.id),
        })
        .collect()
}
