use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 以字串為鍵的欄位集合，例如 `{ "state_1": { "name": "Intro" } }`
pub type Mapping = serde_json::Map<String, Value>;

pub const DEFAULT_INVALID_NAME_CHARS: &str = ":#/|%<>[]{}\\";

/// 實體名稱驗證規則
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRules {
    pub invalid_name_chars: String,
}

impl NameRules {
    pub fn new(invalid_name_chars: impl Into<String>) -> Self {
        Self {
            invalid_name_chars: invalid_name_chars.into(),
        }
    }

    /// 回傳 `input` 中第一個出現的禁用字元（依規則的順序）
    pub fn first_invalid_char(&self, input: &str) -> Option<char> {
        self.invalid_name_chars
            .chars()
            .find(|ch| input.contains(*ch))
    }
}

impl Default for NameRules {
    fn default() -> Self {
        Self::new(DEFAULT_INVALID_NAME_CHARS)
    }
}

/// Loose equality between a (possibly missing) field and a candidate value.
///
/// Values of the same kind compare structurally. Mixed primitives are
/// compared as numbers, so `"1"` matches `1` and `true` matches `1`.
/// `null` only matches `null` or a missing field. Arrays and objects never
/// match a primitive.
pub fn loose_eq(field: Option<&Value>, candidate: &Value) -> bool {
    let Some(field) = field else {
        return candidate.is_null();
    };

    match (field, candidate) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            field == candidate
        }
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        _ => match (to_number(field), to_number(candidate)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// 將原始型別轉成數字；無法轉換時回傳 `None`（相當於 NaN）
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => string_to_number(s),
        _ => None,
    }
}

fn string_to_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // f64::from_str also accepts "inf" and "nan", which are not numbers here
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Text form of a value as shown to users in warning messages.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or_default();
                if f.fract() == 0.0 && f.abs() < 1e21 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
