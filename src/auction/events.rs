use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum LedgerEvent {
    // 경매 생성 이벤트
    AuctionCreated {
        index: u64,
        item: String,
        starting_price: u64,
        duration_secs: u64,
        timestamp: DateTime<Utc>,
    },
    // 경매 낙찰(종료) 이벤트
    AuctionEnded {
        index: u64,
        final_price: u64,
        winner: String,
        timestamp: DateTime<Utc>,
    },
}

impl LedgerEvent {
    /// 이벤트 저장소 봉투에 기록되는 타입명
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::AuctionCreated { .. } => "AuctionCreated",
            LedgerEvent::AuctionEnded { .. } => "AuctionEnded",
        }
    }

    /// 이벤트가 속한 경매 인덱스
    pub fn index(&self) -> u64 {
        match self {
            LedgerEvent::AuctionCreated { index, .. } => *index,
            LedgerEvent::AuctionEnded { index, .. } => *index,
        }
    }
}
