use crate::domain::model::{display_value, loose_eq, Mapping};
use crate::domain::ports::WarningSink;
use serde_json::Value;

/// 檢查 `new_value` 是否已出現在 `current_key` 以外某個項目的 `field` 欄位
pub fn is_duplicate_input(mapping: &Mapping, field: &str, current_key: &str, new_value: &Value) -> bool {
    mapping
        .iter()
        .filter(|(key, _)| key.as_str() != current_key)
        .any(|(key, entry)| {
            let duplicate = loose_eq(entry.get(field), new_value);
            if duplicate {
                tracing::debug!("Field '{}' of '{}' already holds {}", field, key, new_value);
            }
            duplicate
        })
}

/// Sequence variant of [`is_duplicate_input`]. `current_index` is the row
/// being edited (`None` for a row that is not in the list yet). A warning
/// naming the value is reported for the first duplicate found.
pub fn is_duplicate_array_input<W: WarningSink + ?Sized>(
    entries: &[Value],
    field: &str,
    current_index: Option<usize>,
    new_value: &Value,
    warnings: &mut W,
) -> bool {
    let duplicate_at = entries
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != current_index)
        .find(|(_, entry)| loose_eq(entry.get(field), new_value))
        .map(|(index, _)| index);

    match duplicate_at {
        Some(index) => {
            tracing::debug!("Field '{}' at index {} already holds {}", field, index, new_value);
            warnings.add_warning(&format!(
                "The name '{}' is already in use.",
                display_value(new_value)
            ));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::warnings::WarningsData;
    use serde_json::json;

    fn states() -> Mapping {
        json!({
            "intro": {"name": "Intro"},
            "middle": {"name": "Middle"},
            "end": {"name": "End", "terminal": true}
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_is_duplicate_input() {
        let mapping = states();
        assert!(is_duplicate_input(&mapping, "name", "intro", &json!("Middle")));
        assert!(!is_duplicate_input(&mapping, "name", "intro", &json!("Intro")));
        assert!(!is_duplicate_input(&mapping, "name", "intro", &json!("Other")));
    }

    #[test]
    fn test_is_duplicate_input_uses_loose_equality() {
        let mapping = json!({"a": {"n": 1}, "b": {"n": "2"}})
            .as_object()
            .cloned()
            .unwrap();
        assert!(is_duplicate_input(&mapping, "n", "b", &json!("1")));
        assert!(is_duplicate_input(&mapping, "n", "a", &json!(2)));
    }

    #[test]
    fn test_missing_field_only_matches_null() {
        let mapping = states();
        assert!(is_duplicate_input(&mapping, "terminal", "end", &Value::Null));
        assert!(!is_duplicate_input(&mapping, "terminal", "end", &json!(false)));
    }

    #[test]
    fn test_is_duplicate_array_input() {
        let entries = vec![json!({"f": "x"}), json!({"f": "y"})];
        let mut warnings = WarningsData::default();

        assert!(is_duplicate_array_input(&entries, "f", Some(0), &json!("y"), &mut warnings));
        assert_eq!(warnings.warnings(), &["The name 'y' is already in use.".to_string()]);
    }

    #[test]
    fn test_current_index_is_excluded() {
        let entries = vec![json!({"f": "x"}), json!({"f": "y"})];
        let mut warnings = WarningsData::default();

        assert!(!is_duplicate_array_input(&entries, "f", Some(1), &json!("y"), &mut warnings));
        assert!(!is_duplicate_array_input(&entries, "f", Some(0), &json!("z"), &mut warnings));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_new_row_checks_every_entry() {
        let entries = vec![json!({"f": 7}), json!("not an object")];
        let mut warnings = WarningsData::default();

        assert!(is_duplicate_array_input(&entries, "f", None, &json!("7"), &mut warnings));
        assert_eq!(warnings.warnings(), &["The name '7' is already in use.".to_string()]);
    }
}
