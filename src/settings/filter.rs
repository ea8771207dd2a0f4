use serde::{Deserialize, Deserializer};
use std::env;
use crate::filter::{split_list, DEFAULT_DEDUP_HEADERS, DEFAULT_ENDPOINT_PATTERN};
use super::{server::parse_env_var, SettingsError};

/// 검색 응답 필터 설정
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterSettings {
    /// 필터 활성화 여부 (기본값: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// 검색 엔드포인트 패턴 목록
    ///
    /// 쉼표로 구분된 문자열 또는 배열로 지정합니다.
    #[serde(default = "default_endpoint_pattern", deserialize_with = "deserialize_list")]
    pub endpoint_pattern: Vec<String>,

    /// 중복을 제거할 헤더 이름 목록
    #[serde(default = "default_dedup_headers", deserialize_with = "deserialize_list")]
    pub dedup_headers: Vec<String>,
}

fn default_enabled() -> bool { true }

fn default_endpoint_pattern() -> Vec<String> {
    vec![DEFAULT_ENDPOINT_PATTERN.to_string()]
}

fn default_dedup_headers() -> Vec<String> {
    split_list(DEFAULT_DEDUP_HEADERS)
}

fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrString {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match ListOrString::deserialize(deserializer)? {
        ListOrString::List(items) => items.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        ListOrString::Csv(source) => split_list(&source),
    })
}

impl FilterSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            enabled: parse_env_var("PROXY_SEARCH_FILTER_ENABLED", default_enabled)?,
            endpoint_pattern: env::var("PROXY_SEARCH_ENDPOINT_PATTERN")
                .map(|v| split_list(&v))
                .unwrap_or_else(|_| default_endpoint_pattern()),
            dedup_headers: env::var("PROXY_SEARCH_DEDUP_HEADERS")
                .map(|v| split_list(&v))
                .unwrap_or_else(|_| default_dedup_headers()),
        })
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint_pattern: default_endpoint_pattern(),
            dedup_headers: default_dedup_headers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        filter: FilterSettings,
    }

    #[test]
    fn test_csv_and_array_forms() {
        let csv: Wrapper = toml::from_str(r#"
            [filter]
            endpoint_pattern = "/a$, /b$"
            dedup_headers = "Transfer-Encoding,X-Dup"
        "#).unwrap();
        assert_eq!(csv.filter.endpoint_pattern, vec!["/a$", "/b$"]);
        assert_eq!(csv.filter.dedup_headers, vec!["Transfer-Encoding", "X-Dup"]);
        assert!(csv.filter.enabled);

        let array: Wrapper = toml::from_str(r#"
            [filter]
            enabled = false
            endpoint_pattern = ['/x/\d+$']
        "#).unwrap();
        assert_eq!(array.filter.endpoint_pattern, vec![r"/x/\d+$"]);
        assert_eq!(array.filter.dedup_headers, vec!["Transfer-Encoding"]);
        assert!(!array.filter.enabled);
    }
}
