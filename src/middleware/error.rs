use std::fmt;

#[derive(Debug)]
pub enum MiddlewareError {
    /// 설정 오류
    Config(String),
}

impl fmt::Display for MiddlewareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "설정 오류: {}", msg),
        }
    }
}

impl std::error::Error for MiddlewareError {}
