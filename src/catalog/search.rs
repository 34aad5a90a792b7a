/// Free-text search over dotted field paths
use serde::Serialize;
use serde_json::Value;

use crate::utils::value_to_short_string;

/// Product fields matched by free-text search.
pub const PRODUCT_SEARCH_FIELDS: &[&str] = &["name", "organization.name", "category.name", "category.description"];
pub const ORGANIZATION_SEARCH_FIELDS: &[&str] = &["name"];
pub const CATEGORY_SEARCH_FIELDS: &[&str] = &["name", "description"];

/// Resolve a dotted path (`organization.name`) inside a JSON value.
///
/// Returns `None` when any segment is missing, lands on a non-object, or the
/// final value is `null`.
pub fn nested_value<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
        .filter(|v| !v.is_null())
}

/// Case-insensitive substring match of `term` against any of `fields`.
pub fn matches_term(value: &Value, term_lower: &str, fields: &[&str]) -> bool {
    fields.iter().any(|field| {
        nested_value(value, field)
            .map(|v| value_to_short_string(v).to_lowercase().contains(term_lower))
            .unwrap_or(false)
    })
}

/// Keep the items whose configured fields contain `term`, preserving order.
/// An empty term returns every item.
pub fn filter_items<T>(items: &[T], term: &str, fields: &[&str]) -> Vec<T>
where
    T: Serialize + Clone,
{
    if term.is_empty() {
        return items.to_vec();
    }
    let term_lower = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            serde_json::to_value(item)
                .map(|value| matches_term(&value, &term_lower, fields))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
