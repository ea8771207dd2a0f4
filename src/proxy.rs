use std::fmt;
use hyper::{header, Request, Response, StatusCode, Uri};
use hyper::body::{Bytes, Incoming};
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use url::Url;
use tracing::{debug, instrument};

#[derive(Debug)]
pub enum ProxyError {
    /// 백엔드 URI를 만들 수 없음
    InvalidUri(String),
    /// 백엔드 요청 실패
    Request(legacy::Error),
    /// 백엔드 응답 본문 수집 실패
    Body(hyper::Error),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUri(msg) => write!(f, "잘못된 백엔드 URI: {}", msg),
            Self::Request(e) => write!(f, "Backend request failed: {}", e),
            Self::Body(e) => write!(f, "Failed to collect response body: {}", e),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            Self::Body(e) => Some(e),
            Self::InvalidUri(_) => None,
        }
    }
}

/// 검색 백엔드로 요청을 전달하는 클라이언트
#[derive(Clone)]
pub struct ProxyClient {
    client: legacy::Client<HttpConnector, Incoming>,
    backend: Url,
}

impl ProxyClient {
    pub fn new(backend_url: &str) -> Result<Self, ProxyError> {
        let backend = Url::parse(backend_url)
            .map_err(|e| ProxyError::InvalidUri(format!("{}: {}", backend_url, e)))?;

        let connector = HttpConnector::new();
        let client = legacy::Client::builder(TokioExecutor::new())
            .build::<_, Incoming>(connector);

        Ok(Self { client, backend })
    }

    pub fn backend(&self) -> &Url {
        &self.backend
    }

    /// 요청을 백엔드로 전달하고 본문을 모두 수집한 응답을 반환합니다.
    #[instrument(skip(self, req), fields(backend = %self.backend))]
    pub async fn forward(&self, req: Request<Incoming>) -> Result<Response<Full<Bytes>>, ProxyError> {
        let path_and_query = req.uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let uri = self.backend_uri(path_and_query)?;

        let (mut parts, body) = req.into_parts();
        parts.uri = uri;
        // Host는 클라이언트가 백엔드 주소로 다시 채운다
        parts.headers.remove(header::HOST);

        let res = self.client
            .request(Request::from_parts(parts, body))
            .await
            .map_err(ProxyError::Request)?;

        let (parts, body) = res.into_parts();
        let bytes = body.collect().await.map_err(ProxyError::Body)?.to_bytes();
        debug!(status = %parts.status, bytes_size = bytes.len(), "Response body collected");

        Ok(Response::from_parts(parts, Full::new(bytes)))
    }

    fn backend_uri(&self, path_and_query: &str) -> Result<Uri, ProxyError> {
        let base = self.backend.as_str().trim_end_matches('/');
        format!("{}{}", base, path_and_query)
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| ProxyError::InvalidUri(e.to_string()))
    }
}

pub fn error_response(error: &ProxyError) -> Response<Full<Bytes>> {
    let status = match error {
        ProxyError::InvalidUri(_) => StatusCode::BAD_REQUEST,
        ProxyError::Request(_) | ProxyError::Body(_) => StatusCode::BAD_GATEWAY,
    };

    let mut response = Response::new(Full::new(Bytes::from(error.to_string())));
    *response.status_mut() = status;
    response
}
