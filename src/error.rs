use thiserror::Error;

/// 경매 원장 오류 분류
/// 모든 오류는 호출 단위에 국한되며 원장 상태를 손상시키지 않는다.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AuctionError {
    /// 존재하지 않는 경매 인덱스
    #[error("auction not found")]
    NotFound,

    /// 시작 가격이 할인율 * 기간 이하인 경우
    #[error("incorrect starting price")]
    InvalidPricing,

    /// 이미 낙찰(중지)된 경매
    #[error("auction is stopped")]
    AuctionStopped,

    /// 기간이 지나 종료된 경매
    #[error("auction is ended")]
    AuctionEnded,

    /// 제시 금액이 현재 가격보다 낮은 경우
    #[error("not enough funds")]
    InsufficientFunds,

    /// 내부 오류(감사 기록 실패 등)
    #[error("internal: {0}")]
    Internal(String),
}

impl AuctionError {
    /// 외부 인터페이스용 오류 코드
    pub fn code(&self) -> &'static str {
        match self {
            AuctionError::NotFound => "NOT_FOUND",
            AuctionError::InvalidPricing => "INVALID_PRICING",
            AuctionError::AuctionStopped => "AUCTION_STOPPED",
            AuctionError::AuctionEnded => "AUCTION_ENDED",
            AuctionError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            AuctionError::Internal(_) => "INTERNAL",
        }
    }
}
