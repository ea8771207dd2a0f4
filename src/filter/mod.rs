//! 검색 응답 헤더 중복 제거 필터
//!
//! 요청 경로가 검색 엔드포인트 패턴과 매칭되면 응답 헤더에서
//! 설정된 헤더의 중복 값을 제거합니다.

pub mod error;
pub mod headers;
pub mod matcher;

pub use error::FilterError;
pub use headers::{DedupHeaderSet, HeaderDeduplicator, DEFAULT_DEDUP_HEADERS};
pub use matcher::{EndpointPatternSet, PatternMatcher, DEFAULT_ENDPOINT_PATTERN};

use hyper::HeaderMap;
use tracing::debug;
use crate::settings::FilterSettings;

/// 쉼표로 구분된 설정 값을 나눕니다. 공백은 제거하고 빈 항목은 버립니다.
pub(crate) fn split_list(source: &str) -> Vec<String> {
    source.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// 경로 매칭과 헤더 중복 제거를 묶은 요청별 훅
#[derive(Debug, Clone)]
pub struct SearchFilter {
    enabled: bool,
    matcher: PatternMatcher,
    deduplicator: HeaderDeduplicator,
}

impl SearchFilter {
    /// 설정으로부터 필터를 생성합니다. 패턴 컴파일 실패 시 즉시 에러를 반환합니다.
    pub fn new(settings: &FilterSettings) -> Result<Self, FilterError> {
        let patterns = EndpointPatternSet::from_list(settings.endpoint_pattern.iter().cloned());
        let headers = DedupHeaderSet::from_list(settings.dedup_headers.iter().cloned());

        let matcher = PatternMatcher::new(&patterns)?;
        debug!(
            enabled = settings.enabled,
            patterns = ?patterns.patterns(),
            headers = ?headers.names(),
            "검색 필터 생성"
        );

        Ok(Self {
            enabled: settings.enabled,
            matcher,
            deduplicator: HeaderDeduplicator::new(headers),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    pub fn deduplicator(&self) -> &HeaderDeduplicator {
        &self.deduplicator
    }

    /// 필터가 적용될 경로인지 확인합니다.
    pub fn applies_to(&self, path: &str) -> bool {
        self.enabled && self.matcher.matches(path)
    }

    /// 응답 헤더에 필터를 적용하고 제거된 값의 개수를 반환합니다.
    pub fn apply(&self, path: &str, headers: &mut HeaderMap) -> usize {
        if !self.applies_to(path) {
            return 0;
        }

        let removed = self.deduplicator.deduplicate(headers);
        if removed > 0 {
            debug!(path = %path, removed, "검색 응답의 중복 헤더 제거");
        }
        removed
    }

    /// `(이름, 값)` 목록 형태의 응답 헤더에 필터를 적용합니다.
    pub fn apply_list(&self, path: &str, headers: &mut Vec<(String, String)>) -> usize {
        if !self.applies_to(path) {
            return 0;
        }
        self.deduplicator.deduplicate_list(headers)
    }
}
