use serde_json::Value;

pub fn attribute_from_value(value: &Value, attribute: &str) -> Option<String> {
    let element = value[attribute].as_str()?;
    if element.is_empty() {
        return None;
    }
    Some(String::from(element))
}

/// Like [`attribute_from_value`] but missing, null or non-string values
/// become the empty string.
pub fn attribute_or_empty(value: &Value, attribute: &str) -> String {
    attribute_from_value(value, attribute).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_and_missing_attributes_are_none() {
        let value = json!({"from": "", "from_who": null, "hitokoto": "a"});
        assert_eq!(attribute_from_value(&value, "from"), None);
        assert_eq!(attribute_from_value(&value, "from_who"), None);
        assert_eq!(attribute_from_value(&value, "absent"), None);
        assert_eq!(attribute_from_value(&value, "hitokoto"), Some("a".to_string()));
    }

    #[test]
    fn or_empty_defaults() {
        let value = json!({"from": 3});
        assert_eq!(attribute_or_empty(&value, "from"), "");
        assert_eq!(attribute_or_empty(&json!(null), "from"), "");
    }
}
