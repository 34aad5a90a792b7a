use serde_json::Value;

/// Flatten a JSON value into the text free-text search compares against.
///
/// Objects contribute only their values, so searching a nested record never
/// matches on key names.
pub fn value_to_short_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => obj
            .values()
            .map(value_to_short_string)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(value_to_short_string(&json!("TechCorp")), "TechCorp");
        assert_eq!(value_to_short_string(&json!(42)), "42");
        assert_eq!(value_to_short_string(&Value::Null), "");
    }

    #[test]
    fn test_object_values_only() {
        let s = value_to_short_string(&json!({"id": 3, "name": "Books", "description": null}));
        assert!(s.contains("Books"));
        assert!(!s.contains("name"));
    }
}
