use std::fmt;

/// 필터 구성 단계에서 발생하는 에러입니다.
///
/// 요청 처리 중에는 에러가 발생하지 않으며, 이 타입은 시작 시점에만 반환됩니다.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// 컴파일할 수 없는 엔드포인트 패턴
    InvalidPattern {
        pattern: String,
        reason: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidPattern { pattern, reason } =>
                write!(f, "잘못된 엔드포인트 패턴: {} ({})", pattern, reason),
        }
    }
}

impl std::error::Error for FilterError {}
