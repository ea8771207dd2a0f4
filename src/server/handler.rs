use std::time::Instant;
use hyper::{Request, Response};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use uuid::Uuid;
use tracing::debug;
use crate::{
    logging::{RequestLog, log_request},
    middleware::{MiddlewareChain, RequestContext, handle_middleware_error},
    proxy::{self, ProxyClient},
};

pub struct RequestHandler {
    proxy: ProxyClient,
    middlewares: MiddlewareChain,
}

impl RequestHandler {
    pub fn new(proxy: ProxyClient, middlewares: MiddlewareChain) -> Self {
        Self { proxy, middlewares }
    }

    pub async fn handle_request(
        &self,
        req: Request<Incoming>,
    ) -> Result<Response<Full<Bytes>>, std::convert::Infallible> {
        let start_time = Instant::now();
        let request_id = Uuid::new_v4().to_string();
        let ctx = RequestContext::from_request(request_id.clone(), &req);
        let mut log = RequestLog::new(request_id);
        log.with_request(&req);

        // 1. 백엔드로 전달
        let response = match self.proxy.forward(req).await {
            Ok(response) => response,
            Err(e) => {
                log.with_error(&e);
                let response = proxy::error_response(&e);
                log.with_response(response.status());
                log.duration_ms = start_time.elapsed().as_millis() as u64;
                log_request(&log);
                return Ok(response);
            }
        };

        // 2. 응답 미들웨어 처리
        let before = response.headers().len();
        let response = match self.middlewares.handle_response(&ctx, response).await {
            Ok(response) => {
                log.deduplicated = before.saturating_sub(response.headers().len());
                debug!(headers = ?response.headers(), "응답 미들웨어 처리 완료");
                response
            }
            Err(e) => {
                log.with_error(&e);
                handle_middleware_error(e)
            }
        };

        log.with_response(response.status());
        log.duration_ms = start_time.elapsed().as_millis() as u64;
        log_request(&log);
        Ok(response)
    }

    pub async fn handle_connection<I>(&self, io: I) -> std::result::Result<(), hyper::Error>
    where
        I: hyper::rt::Read + hyper::rt::Write + Send + Unpin + 'static,
    {
        http1::Builder::new()
            .serve_connection(
                io,
                service_fn(|req| self.handle_request(req)),
            )
            .await
    }
}
