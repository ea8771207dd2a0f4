use regex_lite as regex;
use tracing::debug;
use crate::filter::error::FilterError;
use crate::filter::split_list;

/// 기본 검색 엔드포인트 패턴
///
/// `/context/api/v1/search`, `/context/api/v1/index/_search` 형태를 매칭합니다.
pub const DEFAULT_ENDPOINT_PATTERN: &str = r"(/[^/]+)?/api/v\d+(/[^/]+)?/_?search$";

/// 검색 엔드포인트로 취급할 경로 패턴 목록 (비어 있지 않음)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPatternSet {
    patterns: Vec<String>,
}

impl EndpointPatternSet {
    /// 쉼표로 구분된 패턴 문자열에서 생성합니다.
    pub fn parse(source: &str) -> Self {
        Self::from_list(split_list(source))
    }

    /// 빈 항목을 제거하고, 남는 패턴이 없으면 기본 패턴을 사용합니다.
    pub fn from_list<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter()
            .map(Into::into)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if patterns.is_empty() {
            return Self::default();
        }
        Self { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for EndpointPatternSet {
    fn default() -> Self {
        Self {
            patterns: vec![DEFAULT_ENDPOINT_PATTERN.to_string()],
        }
    }
}

/// 컴파일된 엔드포인트 패턴 집합
///
/// 생성 이후에는 불변이므로 `Arc`로 여러 요청에서 공유할 수 있습니다.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    compiled: Vec<regex::Regex>,
}

impl PatternMatcher {
    /// 모든 패턴을 한 번씩 컴파일합니다. 하나라도 실패하면 전체가 실패합니다.
    pub fn new(set: &EndpointPatternSet) -> Result<Self, FilterError> {
        let compiled = set.patterns()
            .iter()
            .map(|pattern| {
                regex::Regex::new(pattern).map_err(|e| FilterError::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(patterns = ?set.patterns(), "엔드포인트 패턴 컴파일 완료");
        Ok(Self { compiled })
    }

    /// 경로가 하나 이상의 패턴과 매칭되는지 확인합니다.
    ///
    /// 시작 위치는 고정하지 않으며, 패턴 자체의 `$`만 끝을 고정합니다.
    pub fn matches(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        self.compiled.iter().any(|re| re.is_match(path))
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}
