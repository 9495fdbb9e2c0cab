use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 경매 모델
// 인덱스는 0부터 단조 증가하며 재사용되지 않는다.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Auction {
    pub index: u64,
    pub seller: String,
    pub starting_price: u64,
    pub final_price: u64,
    pub start_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub discount_rate: u64,
    pub item: String,
    pub stopped: bool,
}

// 정산 모델
// 실제 자금 이동은 외부 계정 협력자에게 위임한다.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settlement {
    pub index: u64,
    pub final_price: u64,
    pub fee: u64,
    pub seller_proceeds: u64,
    pub refund: u64,
    pub seller: String,
    pub winner: String,
}
