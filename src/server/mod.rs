pub mod handler;
pub mod listener;
pub mod error;

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use crate::filter::SearchFilter;
use crate::middleware::{HeaderDedupMiddleware, MiddlewareChain};
use crate::proxy::ProxyClient;
use crate::settings::Settings;

pub use error::Error;
pub use handler::RequestHandler;
pub use listener::ServerListener;

pub type Result<T> = std::result::Result<T, Error>;

/// 설정으로부터 요청 핸들러를 구성합니다.
///
/// 엔드포인트 패턴이 잘못된 경우 여기서 실패하며 서버는 시작되지 않습니다.
pub fn build_handler(settings: &Settings) -> Result<RequestHandler> {
    let filter = Arc::new(SearchFilter::new(&settings.filter)?);
    let proxy = ProxyClient::new(&settings.server.backend_url)?;

    let mut middlewares = MiddlewareChain::new();
    middlewares.add(HeaderDedupMiddleware::new(filter));

    info!(
        backend = %proxy.backend(),
        filter_enabled = settings.filter.enabled,
        "요청 핸들러 구성 완료"
    );
    Ok(RequestHandler::new(proxy, middlewares))
}

/// 설정된 포트에서 서버를 실행합니다.
pub async fn serve<F>(settings: &Settings, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let handler = Arc::new(build_handler(settings)?);
    let listener = ServerListener::bind(settings.server.http_port).await?;
    listener.run(handler, shutdown).await
}

/// 이미 바인딩된 리스너로 서버를 실행합니다.
pub async fn serve_with_listener<F>(settings: &Settings, listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let handler = Arc::new(build_handler(settings)?);
    ServerListener::from_listener(listener).run(handler, shutdown).await
}
