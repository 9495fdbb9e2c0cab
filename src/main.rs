// region:    --- Imports
use axum::extract::DefaultBodyLimit;
use dutch_auction_service::clock::SystemClock;
use dutch_auction_service::event_store::InMemoryEventStore;
use dutch_auction_service::handlers;
use dutch_auction_service::ledger::LedgerManager;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 이벤트 저장소 생성
    let event_store = Arc::new(InMemoryEventStore::new());

    // 원장 매니저 생성 (시스템 시계 + 환경 변수 설정)
    let ledger = Arc::new(LedgerManager::from_env(
        Arc::new(SystemClock),
        Arc::clone(&event_store),
    ));
    info!(
        "{:<12} --> 원장 초기화: owner={} fee={}% default_duration={}s",
        "Main",
        ledger.owner(),
        ledger.fee_percent(),
        ledger.default_duration_secs()
    );

    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = handlers::routes((ledger, event_store))
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024));

    // 리스너 생성
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
