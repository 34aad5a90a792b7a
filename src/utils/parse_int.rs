/// Parse an optional integer id from a form or query value; blank means "not selected"
pub fn parse_optional_id(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            t.parse::<i64>().ok()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id(Some(" 42 ")), Some(42));
        assert_eq!(parse_optional_id(Some("")), None);
        assert_eq!(parse_optional_id(Some("abc")), None);
        assert_eq!(parse_optional_id(None), None);
    }
}
