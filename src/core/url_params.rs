use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn query_pair() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[?&]+([^=&]+)=([^&]*)").expect("query pattern is valid"))
}

/// 取出 URL 中 `?`/`&` 後面的 `key=value`；重複的 key 以最後一個為準
///
/// 值保持原樣，不做百分比解碼。沒有 `=` 的片段會被略過。
pub fn get_url_params(url: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for caps in query_pair().captures_iter(url) {
        params.insert(caps[1].to_string(), caps[2].to_string());
    }
    tracing::debug!("Extracted {} URL parameter(s)", params.len());
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_url_params() {
        let params = get_url_params("https://example.com/create?name=intro&mode=edit");
        assert_eq!(params.len(), 2);
        assert_eq!(params["name"], "intro");
        assert_eq!(params["mode"], "edit");
    }

    #[test]
    fn test_last_occurrence_wins() {
        let params = get_url_params("/learn?tab=a&tab=b");
        assert_eq!(params["tab"], "b");
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let params = get_url_params("/page?flag&=orphan&ok=1&&also=&x");
        assert_eq!(params.len(), 2);
        assert_eq!(params["ok"], "1");
        assert_eq!(params["also"], "");
    }

    #[test]
    fn test_values_are_not_decoded() {
        let params = get_url_params("/q?text=a%20b&plus=c+d");
        assert_eq!(params["text"], "a%20b");
        assert_eq!(params["plus"], "c+d");
    }

    #[test]
    fn test_no_query() {
        assert!(get_url_params("https://example.com/path").is_empty());
    }
}
