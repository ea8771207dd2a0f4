use std::process;
use search_header_filter::{logging, server, settings::Settings};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let settings = match Settings::load().await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("설정 로드 실패: {}", e);
            process::exit(1);
        }
    };

    let guard = logging::init_logging(&settings.logging);
    info!(
        port = settings.server.http_port,
        backend = %settings.server.backend_url,
        patterns = ?settings.filter.endpoint_pattern,
        headers = ?settings.filter.dedup_headers,
        "Search header filter starting"
    );

    if let Err(e) = server::serve(&settings, shutdown_signal()).await {
        error!(error = %e, "서버 실행 실패");
        drop(guard);
        process::exit(1);
    }

    info!("서버 종료");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "종료 신호 대기 실패");
        std::future::pending::<()>().await;
    }
}
