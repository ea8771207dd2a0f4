use super::{Response, MiddlewareError};
use async_trait::async_trait;
use hyper::Method;

/// 응답 미들웨어가 참조하는 원래 요청 정보
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub method: Method,
    pub path: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            method,
            path: path.into(),
        }
    }

    pub fn from_request<B>(request_id: impl Into<String>, req: &hyper::Request<B>) -> Self {
        Self::new(request_id, req.method().clone(), req.uri().path())
    }
}

/// 미들웨어 트레이트
///
/// 백엔드 응답을 클라이언트로 보내기 전에 수정할 수 있는 인터페이스를 정의합니다.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// 미들웨어의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// HTTP 응답을 처리합니다.
    async fn handle_response(&self, ctx: &RequestContext, res: Response) -> Result<Response, MiddlewareError>;
}
