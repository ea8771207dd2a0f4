use std::fmt;
use crate::filter::FilterError;
use crate::proxy::ProxyError;

#[derive(Debug)]
pub enum Error {
    IoError(std::io::Error),
    FilterError(FilterError),
    ProxyError(ProxyError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<FilterError> for Error {
    fn from(err: FilterError) -> Self {
        Error::FilterError(err)
    }
}

impl From<ProxyError> for Error {
    fn from(err: ProxyError) -> Self {
        Error::ProxyError(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "IO Error: {}", e),
            Error::FilterError(e) => write!(f, "Filter Error: {}", e),
            Error::ProxyError(e) => write!(f, "Proxy Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
