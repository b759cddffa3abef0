use crate::core::text::normalize_whitespace;
use crate::domain::model::NameRules;
use crate::domain::ports::WarningSink;

pub const EMPTY_NAME_WARNING: &str = "Please enter a non-empty name.";
pub const INVALID_NAME_WARNING: &str = "Invalid input. Please use a non-empty description \
     consisting of alphanumeric characters, underscores, spaces and/or hyphens.";

/// 檢查實體名稱是否有效；`show_warnings` 為真時，失敗原因會送到 `warnings`
pub fn is_valid_entity_name<W: WarningSink + ?Sized>(
    input: &str,
    show_warnings: bool,
    rules: &NameRules,
    warnings: &mut W,
) -> bool {
    let input = normalize_whitespace(input);

    if input.is_empty() {
        tracing::debug!("Rejected entity name: empty after normalization");
        if show_warnings {
            warnings.add_warning(EMPTY_NAME_WARNING);
        }
        return false;
    }

    if let Some(ch) = rules.first_invalid_char(&input) {
        tracing::debug!("Rejected entity name {:?}: contains {:?}", input, ch);
        if show_warnings {
            warnings.add_warning(INVALID_NAME_WARNING);
        }
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::warnings::WarningsData;

    #[test]
    fn test_valid_entity_names() {
        let rules = NameRules::new("ace");
        let mut warnings = WarningsData::default();

        for name in ["b", "b   ", "   b", "bd", "b  d"] {
            assert!(
                is_valid_entity_name(name, true, &rules, &mut warnings),
                "expected {:?} to be valid",
                name
            );
        }
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_entity_names() {
        let rules = NameRules::new("ace");
        let mut warnings = WarningsData::default();

        for name in ["", "   ", "a", "c", "ba"] {
            assert!(
                !is_valid_entity_name(name, false, &rules, &mut warnings),
                "expected {:?} to be invalid",
                name
            );
        }
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_warnings_are_reported_when_requested() {
        let rules = NameRules::new("ace");
        let mut warnings = WarningsData::default();

        assert!(!is_valid_entity_name("  ", true, &rules, &mut warnings));
        assert!(!is_valid_entity_name("bad", true, &rules, &mut warnings));

        assert_eq!(
            warnings.warnings(),
            &[EMPTY_NAME_WARNING.to_string(), INVALID_NAME_WARNING.to_string()]
        );
    }

    #[test]
    fn test_empty_rule_set_accepts_any_non_empty_name() {
        let rules = NameRules::new("");
        let mut warnings = WarningsData::default();
        assert!(is_valid_entity_name("a/b:c", true, &rules, &mut warnings));
    }
}
