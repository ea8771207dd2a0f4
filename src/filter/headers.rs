use std::collections::HashSet;
use std::sync::OnceLock;
use hyper::header::{HeaderMap, HeaderName};
use tracing::{trace, warn};
use crate::filter::split_list;

/// 기본 중복 제거 대상 헤더
pub const DEFAULT_DEDUP_HEADERS: &str = "Transfer-Encoding";

/// 중복 제거 대상 헤더 이름 집합
///
/// 설정된 원래 표기와, 최초 조회 시 한 번만 계산되는 소문자 표기를 함께 가집니다.
#[derive(Debug, Clone)]
pub struct DedupHeaderSet {
    names: Vec<String>,
    lowercase: OnceLock<Vec<String>>,
}

impl DedupHeaderSet {
    /// 쉼표로 구분된 헤더 이름 문자열에서 생성합니다.
    pub fn parse(source: &str) -> Self {
        Self::from_list(split_list(source))
    }

    /// 빈 항목은 제거하며, 남는 이름이 없으면 기본값(`Transfer-Encoding`)을 사용합니다.
    pub fn from_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter()
            .map(Into::into)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            return Self::default();
        }

        Self {
            names,
            lowercase: OnceLock::new(),
        }
    }

    /// 설정된 표기 그대로의 이름 목록
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 소문자로 정규화된 이름 목록 (최초 호출 시 계산 후 캐시)
    pub fn lowercase(&self) -> &[String] {
        self.lowercase.get_or_init(|| {
            self.names.iter().map(|n| n.to_lowercase()).collect()
        })
    }

    /// 대소문자 구분 없이 포함 여부를 확인합니다.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.lowercase().iter().any(|n| *n == name)
    }
}

impl Default for DedupHeaderSet {
    fn default() -> Self {
        Self {
            names: vec![DEFAULT_DEDUP_HEADERS.to_string()],
            lowercase: OnceLock::new(),
        }
    }
}

impl PartialEq for DedupHeaderSet {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

/// 응답 헤더의 중복 값을 첫 번째 값 하나로 줄입니다.
#[derive(Debug, Clone)]
pub struct HeaderDeduplicator {
    set: DedupHeaderSet,
    header_names: Vec<HeaderName>,
}

impl HeaderDeduplicator {
    pub fn new(set: DedupHeaderSet) -> Self {
        let header_names = set.lowercase()
            .iter()
            .filter_map(|name| match HeaderName::from_bytes(name.as_bytes()) {
                Ok(header_name) => Some(header_name),
                Err(_) => {
                    warn!(header = %name, "유효한 HTTP 헤더 이름이 아님 - HeaderMap 처리에서 제외");
                    None
                }
            })
            .collect();

        Self { set, header_names }
    }

    pub fn header_set(&self) -> &DedupHeaderSet {
        &self.set
    }

    /// `HeaderMap`을 제자리에서 정리하고 제거된 값의 개수를 반환합니다.
    ///
    /// 헤더 엔트리의 위치는 유지되며 값만 첫 번째 것으로 교체됩니다.
    pub fn deduplicate(&self, headers: &mut HeaderMap) -> usize {
        let mut removed = 0;

        for name in &self.header_names {
            let count = headers.get_all(name).iter().count();
            if count < 2 {
                continue;
            }

            if let Some(first) = headers.get(name).cloned() {
                // 같은 키에 대한 insert는 엔트리 위치를 유지하고 나머지 값을 버린다
                headers.insert(name.clone(), first);
                removed += count - 1;
                trace!(header = %name, dropped = count - 1, "중복 헤더 제거");
            }
        }

        removed
    }

    /// 원래 표기를 가진 `(이름, 값)` 목록을 정리하고 제거된 항목 수를 반환합니다.
    pub fn deduplicate_list(&self, headers: &mut Vec<(String, String)>) -> usize {
        let before = headers.len();
        let mut seen: HashSet<String> = HashSet::new();

        headers.retain(|(name, _)| {
            if !self.set.contains(name) {
                return true;
            }
            seen.insert(name.to_lowercase())
        });

        before - headers.len()
    }
}
