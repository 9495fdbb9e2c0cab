// region:    --- Imports
use crate::auction::model::Auction;
use crate::error::AuctionError;
use crate::event_store::{Event, InMemoryEventStore};
use crate::ledger::LedgerManager;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 경매 단건 조회
pub async fn get_auction(ledger: &LedgerManager, index: u64) -> Result<Auction, AuctionError> {
    info!("{:<12} --> 경매 조회 index: {}", "Query", index);
    ledger.get_auction(index).await
}

/// 전체 경매 조회
pub async fn get_all_auctions(ledger: &LedgerManager) -> Vec<Auction> {
    info!("{:<12} --> 전체 경매 조회", "Query");
    ledger.all_auctions().await
}

/// 경매 개수 조회
pub async fn get_auction_count(ledger: &LedgerManager) -> u64 {
    info!("{:<12} --> 경매 개수 조회", "Query");
    ledger.auction_count().await
}

/// 현재 가격 조회
pub async fn get_current_price(ledger: &LedgerManager, index: u64) -> Result<u64, AuctionError> {
    info!("{:<12} --> 현재 가격 조회 index: {}", "Query", index);
    ledger.price_for(index).await
}

/// 관리 소유자 조회
pub async fn get_owner(ledger: &LedgerManager) -> String {
    info!("{:<12} --> 소유자 조회", "Query");
    ledger.owner().to_string()
}

/// 전체 감사 기록 조회
pub async fn get_all_events(event_store: &InMemoryEventStore) -> Vec<Event> {
    info!("{:<12} --> 전체 감사 기록 조회", "Query");
    event_store.all_events().await
}

/// 특정 경매의 감사 기록 조회
pub async fn get_auction_events(event_store: &InMemoryEventStore, index: u64) -> Vec<Event> {
    info!("{:<12} --> 경매 감사 기록 조회 index: {}", "Query", index);
    event_store.events_for(index).await
}

// endregion: --- Query Handlers
