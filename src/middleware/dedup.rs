use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::filter::SearchFilter;
use crate::settings::FilterSettings;
use super::{Middleware, MiddlewareError, RequestContext, Response};

/// 검색 응답 헤더 중복 제거 미들웨어
pub struct HeaderDedupMiddleware {
    filter: Arc<SearchFilter>,
}

impl HeaderDedupMiddleware {
    pub fn new(filter: Arc<SearchFilter>) -> Self {
        Self { filter }
    }

    pub fn from_settings(settings: &FilterSettings) -> Result<Self, MiddlewareError> {
        let filter = SearchFilter::new(settings)
            .map_err(|e| MiddlewareError::Config(e.to_string()))?;
        Ok(Self::new(Arc::new(filter)))
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }
}

#[async_trait]
impl Middleware for HeaderDedupMiddleware {
    fn name(&self) -> &str {
        "header-dedup"
    }

    async fn handle_response(&self, ctx: &RequestContext, mut res: Response) -> Result<Response, MiddlewareError> {
        let removed = self.filter.apply(&ctx.path, res.headers_mut());
        if removed > 0 {
            info!(
                request_id = %ctx.request_id,
                path = %ctx.path,
                removed,
                "중복 응답 헤더 정리"
            );
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http_body_util::Full;
    use hyper::header::HeaderValue;
    use hyper::Method;

    fn response_with_duplicates() -> Response {
        let mut res = Response::new(Full::new(Bytes::from("{}")));
        let headers = res.headers_mut();
        headers.append("transfer-encoding", HeaderValue::from_static("chunked"));
        headers.append("transfer-encoding", HeaderValue::from_static("identity"));
        headers.append("content-type", HeaderValue::from_static("application/json"));
        res
    }

    #[tokio::test]
    async fn test_search_path_is_deduplicated() {
        let middleware = HeaderDedupMiddleware::from_settings(&FilterSettings::default()).unwrap();
        let ctx = RequestContext::new("test", Method::POST, "/ctx/api/v1/search");

        let res = middleware.handle_response(&ctx, response_with_duplicates()).await.unwrap();
        assert_eq!(res.headers().get_all("transfer-encoding").iter().count(), 1);
        assert_eq!(res.headers()["transfer-encoding"], "chunked");
        assert_eq!(res.headers()["content-type"], "application/json");
    }

    #[tokio::test]
    async fn test_other_path_is_untouched() {
        let middleware = HeaderDedupMiddleware::from_settings(&FilterSettings::default()).unwrap();
        let ctx = RequestContext::new("test", Method::GET, "/health");

        let res = middleware.handle_response(&ctx, response_with_duplicates()).await.unwrap();
        assert_eq!(res.headers().get_all("transfer-encoding").iter().count(), 2);
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let settings = FilterSettings {
            endpoint_pattern: vec!["(".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            HeaderDedupMiddleware::from_settings(&settings),
            Err(MiddlewareError::Config(_))
        ));
    }
}
