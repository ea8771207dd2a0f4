use std::sync::Arc;
use tracing::debug;
use super::{Middleware, MiddlewareError, RequestContext, Response};

#[derive(Default, Clone)]
pub struct MiddlewareChain {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Arc::new(middleware));
    }

    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }

    pub async fn handle_response(
        &self,
        ctx: &RequestContext,
        mut response: Response,
    ) -> Result<Response, MiddlewareError> {
        // 응답은 역순으로 처리
        for middleware in self.middlewares.iter().rev() {
            debug!(middleware = middleware.name(), request_id = %ctx.request_id, "응답 미들웨어 실행");
            response = middleware.handle_response(ctx, response).await?;
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use http_body_util::Full;
    use hyper::header::HeaderValue;
    use hyper::Method;

    struct Tag(&'static str);

    #[async_trait]
    impl Middleware for Tag {
        fn name(&self) -> &str {
            self.0
        }

        async fn handle_response(&self, _ctx: &RequestContext, mut res: Response) -> Result<Response, MiddlewareError> {
            res.headers_mut().append("x-order", HeaderValue::from_static(self.0));
            Ok(res)
        }
    }

    struct Failing;

    #[async_trait]
    impl Middleware for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn handle_response(&self, _ctx: &RequestContext, _res: Response) -> Result<Response, MiddlewareError> {
            Err(MiddlewareError::Config(format!("{} 미들웨어 설정 누락", self.name())))
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new("test", Method::GET, "/")
    }

    #[tokio::test]
    async fn test_response_runs_in_reverse_order() {
        let mut chain = MiddlewareChain::new();
        chain.add(Tag("first"));
        chain.add(Tag("second"));
        assert_eq!(chain.len(), 2);

        let res = chain.handle_response(&ctx(), Response::new(Full::new(Bytes::new()))).await.unwrap();
        let order: Vec<_> = res.headers()
            .get_all("x-order")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(order, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_error_stops_chain() {
        let mut chain = MiddlewareChain::new();
        chain.add(Tag("first"));
        chain.add(Failing);

        let result = chain.handle_response(&ctx(), Response::new(Full::new(Bytes::new()))).await;
        assert!(matches!(result, Err(MiddlewareError::Config(_))));
    }
}
