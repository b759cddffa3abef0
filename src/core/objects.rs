use serde_json::Value;

/// 沒有任何自有項目時回傳 true
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Deep copy. The result shares nothing with `value`.
pub fn clone_object<T: Clone>(value: &T) -> T {
    value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!({"a": null})));
        assert!(is_empty(&json!([])));
        assert!(!is_empty(&json!([0])));
        assert!(is_empty(&json!("")));
        assert!(!is_empty(&json!("x")));
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!(12)));
        assert!(is_empty(&json!(true)));
    }

    #[test]
    fn test_clone_object() {
        let mut original = json!({"a": "b"});
        let copy = clone_object(&original);
        assert_eq!(copy, original);

        original["b"] = json!("c");
        assert_ne!(copy, original);
        assert_eq!(copy, json!({"a": "b"}));
    }

    #[test]
    fn test_clone_object_is_deep() {
        let original = json!({"outer": {"inner": [1, 2]}});
        let mut copy = clone_object(&original);
        copy["outer"]["inner"][0] = json!(99);
        assert_eq!(original["outer"]["inner"][0], json!(1));
    }
}
