use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"))
}

/// 去除前後空白，並把內部連續兩個以上的空白字元換成單一空格
pub fn normalize_whitespace(input: &str) -> String {
    whitespace_run().replace_all(input.trim(), " ").into_owned()
}

/// 字串會被正規化，其他型別原樣回傳
pub fn normalize_value(input: Value) -> Value {
    match input {
        Value::String(s) => Value::String(normalize_whitespace(&s)),
        other => other,
    }
}

/// Joins two sentences, adding a period unless `first` already ends with
/// terminal punctuation.
pub fn neat_join(first: &str, second: &str) -> String {
    if first.ends_with(&['.', '!', '?'][..]) {
        format!("{} {}", first, second)
    } else {
        format!("{}. {}", first, second)
    }
}
