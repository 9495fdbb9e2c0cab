// region:    --- Imports
use crate::error::AuctionError;
use crate::event_store::InMemoryEventStore;
use crate::ledger::LedgerManager;
use crate::query;
use crate::trading::commands::{
    handle_buy, handle_create_auction, BuyCommand, CreateAuctionCommand,
};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Router

/// 핸들러 공유 상태
pub type AppState = (Arc<LedgerManager>, Arc<InMemoryEventStore>);

/// 라우터 설정
/// main과 통합 테스트가 같은 앱을 공유한다.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/auction", post(handle_post_create_auction))
        .route("/buy", post(handle_post_buy))
        .route("/auctions", get(handle_get_auctions))
        .route("/auctions/count", get(handle_get_auction_count))
        .route("/auction/:index", get(handle_get_auction))
        .route("/auction/:index/price", get(handle_get_price))
        .route("/auction/:index/events", get(handle_get_auction_events))
        .route("/events", get(handle_get_events))
        .route("/owner", get(handle_get_owner))
        .with_state(state)
}

/// 오류 응답 변환
/// NotFound는 404, 내부 오류는 500, 나머지 도메인 오류는 400으로 매핑한다.
fn error_response(e: AuctionError) -> Response {
    let status = match e {
        AuctionError::NotFound => axum::http::StatusCode::NOT_FOUND,
        AuctionError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        _ => axum::http::StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(serde_json::json!({
            "error": e.to_string(),
            "code": e.code()
        })),
    )
        .into_response()
}

// endregion: --- Router

// region:    --- Command Handlers

/// 경매 생성 요청 처리
pub async fn handle_post_create_auction(
    State((ledger, _)): State<AppState>,
    Json(cmd): Json<CreateAuctionCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 경매 생성 요청: {:?}", "Handler", cmd);
    match handle_create_auction(cmd, &ledger).await {
        Ok(index) => Json(serde_json::json!({ "index": index })).into_response(),
        Err(e) => error_response(e),
    }
}

/// 구매 요청 처리
pub async fn handle_post_buy(
    State((ledger, _)): State<AppState>,
    Json(cmd): Json<BuyCommand>,
) -> impl IntoResponse {
    info!("{:<12} --> 구매 요청: {:?}", "Handler", cmd);
    match handle_buy(cmd, &ledger).await {
        Ok(settlement) => Json(settlement).into_response(),
        Err(e) => error_response(e),
    }
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 경매 단건 조회
pub async fn handle_get_auction(
    State((ledger, _)): State<AppState>,
    Path(index): Path<u64>,
) -> impl IntoResponse {
    match query::handlers::get_auction(&ledger, index).await {
        Ok(auction) => Json(auction).into_response(),
        Err(e) => error_response(e),
    }
}

/// 전체 경매 조회
pub async fn handle_get_auctions(State((ledger, _)): State<AppState>) -> impl IntoResponse {
    Json(query::handlers::get_all_auctions(&ledger).await).into_response()
}

/// 경매 개수 조회
pub async fn handle_get_auction_count(State((ledger, _)): State<AppState>) -> impl IntoResponse {
    let count = query::handlers::get_auction_count(&ledger).await;
    Json(serde_json::json!({ "count": count })).into_response()
}

/// 현재 가격 조회
pub async fn handle_get_price(
    State((ledger, _)): State<AppState>,
    Path(index): Path<u64>,
) -> impl IntoResponse {
    match query::handlers::get_current_price(&ledger, index).await {
        Ok(price) => Json(serde_json::json!({ "index": index, "price": price })).into_response(),
        Err(e) => error_response(e),
    }
}

/// 관리 소유자 조회
pub async fn handle_get_owner(State((ledger, _)): State<AppState>) -> impl IntoResponse {
    let owner = query::handlers::get_owner(&ledger).await;
    Json(serde_json::json!({ "owner": owner })).into_response()
}

/// 전체 감사 기록 조회
pub async fn handle_get_events(State((_, event_store)): State<AppState>) -> impl IntoResponse {
    Json(query::handlers::get_all_events(&event_store).await).into_response()
}

/// 특정 경매의 감사 기록 조회
pub async fn handle_get_auction_events(
    State((_, event_store)): State<AppState>,
    Path(index): Path<u64>,
) -> impl IntoResponse {
    Json(query::handlers::get_auction_events(&event_store, index).await).into_response()
}

// endregion: --- Query Handlers
