/// 가격 엔진
/// 경매 스냅샷과 시각으로부터 현재 가격을 계산하는 순수 함수.
/// 상태와 부수효과가 없으며 원장이 조회와 정산 검증 양쪽에서 사용한다.
// region:    --- Imports
use crate::auction::model::Auction;
use crate::error::AuctionError;
use chrono::{DateTime, Utc};

// endregion: --- Imports

// region:    --- Pricing Engine

/// 현재 가격 계산
/// price = starting_price - discount_rate * elapsed
/// 생성 불변식(starting_price > discount_rate * duration) 덕분에
/// ends_at 이전에는 가격이 0에 도달하지 않는다.
pub fn current_price(auction: &Auction, now: DateTime<Utc>) -> Result<u64, AuctionError> {
    if auction.stopped {
        return Err(AuctionError::AuctionStopped);
    }
    if now > auction.ends_at {
        return Err(AuctionError::AuctionEnded);
    }

    // 원장 시계가 now >= start_at 을 보장하지만, 직접 호출에 대비해 0으로 클램프
    let elapsed = (now - auction.start_at).num_seconds().max(0) as u64;
    let discount = auction.discount_rate.saturating_mul(elapsed);
    Ok(auction.starting_price.saturating_sub(discount))
}

// endregion: --- Pricing Engine
