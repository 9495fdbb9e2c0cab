/// 경매 원장
/// 추가 전용 경매 테이블의 단일 진실 공급원.
/// 쓰기(생성, 구매)는 쓰기 잠금으로 직렬화되고, 조회는 읽기 잠금으로 동시 실행된다.
// region:    --- Imports
use crate::auction::events::LedgerEvent;
use crate::auction::model::{Auction, Settlement};
use crate::clock::Clock;
use crate::error::AuctionError;
use crate::event_store::{Event, EventStore, InMemoryEventStore};
use crate::pricing;
use chrono::Duration;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// endregion: --- Imports

// region:    --- Config

/// 원장 설정
/// 수수료율과 기본 기간은 초기화 시 한 번 결정되는 상수다.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub fee_percent: u64,
    pub default_duration_secs: u64,
    pub owner: String,
}

impl LedgerConfig {
    /// 환경 변수에서 설정 읽기
    pub fn from_env() -> Self {
        let fee_percent = std::env::var("FEE_PERCENT")
            .ok()
            .map(|v| v.parse().expect("FEE_PERCENT must be an integer"))
            .unwrap_or(10);
        let default_duration_secs = std::env::var("DEFAULT_DURATION_SECS")
            .ok()
            .map(|v| v.parse().expect("DEFAULT_DURATION_SECS must be an integer"))
            .unwrap_or(2 * 24 * 60 * 60);
        let owner = std::env::var("LEDGER_OWNER").unwrap_or_else(|_| "protocol".to_string());
        Self {
            fee_percent,
            default_duration_secs,
            owner,
        }
    }
}

// endregion: --- Config

// region:    --- Ledger Manager

/// 원장 내부 상태
struct LedgerState {
    auctions: Vec<Auction>,
}

/// 원장 매니저
pub struct LedgerManager {
    state: RwLock<LedgerState>,
    config: LedgerConfig,
    clock: Arc<dyn Clock>,
    event_store: Arc<InMemoryEventStore>,
}

impl LedgerManager {
    /// 원장 매니저 생성
    pub fn new(
        config: LedgerConfig,
        clock: Arc<dyn Clock>,
        event_store: Arc<InMemoryEventStore>,
    ) -> Self {
        Self {
            state: RwLock::new(LedgerState {
                auctions: Vec::new(),
            }),
            config,
            clock,
            event_store,
        }
    }

    /// 환경 변수 설정으로 원장 매니저 생성
    pub fn from_env(clock: Arc<dyn Clock>, event_store: Arc<InMemoryEventStore>) -> Self {
        Self::new(LedgerConfig::from_env(), clock, event_store)
    }

    /// 경매 생성
    /// duration_or_zero == 0 이면 기본 기간을 사용한다.
    /// 불변식: starting_price > discount_rate * duration (엄격)
    pub async fn create_auction(
        &self,
        seller: &str,
        starting_price: u64,
        discount_rate: u64,
        item: &str,
        duration_or_zero: u64,
    ) -> Result<u64, AuctionError> {
        let duration_secs = if duration_or_zero == 0 {
            self.config.default_duration_secs
        } else {
            duration_or_zero
        };

        // 곱셈 오버플로도 잘못된 가격 책정으로 거부
        let max_discount = discount_rate
            .checked_mul(duration_secs)
            .ok_or(AuctionError::InvalidPricing)?;
        if starting_price <= max_discount {
            return Err(AuctionError::InvalidPricing);
        }

        // 타임스탬프 범위를 넘는 기간 거부 (ends_at = start_at + duration 불변식 유지)
        let duration = i64::try_from(duration_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or(AuctionError::InvalidPricing)?;

        let mut state = self.state.write().await;
        let now = self.clock.now();
        let ends_at = now
            .checked_add_signed(duration)
            .ok_or(AuctionError::InvalidPricing)?;
        let index = state.auctions.len() as u64;

        let auction = Auction {
            index,
            seller: seller.to_string(),
            starting_price,
            final_price: starting_price,
            start_at: now,
            ends_at,
            discount_rate,
            item: item.to_string(),
            stopped: false,
        };

        let created = LedgerEvent::AuctionCreated {
            index,
            item: item.to_string(),
            starting_price,
            duration_secs,
            timestamp: now,
        };
        let envelope = Event::from_ledger_event(&created, 1).map_err(AuctionError::Internal)?;

        // 테이블 추가와 감사 기록은 쓰기 잠금 안에서 하나의 단위
        state.auctions.push(auction);
        if let Err(e) = self.event_store.append_and_publish_event(envelope).await {
            state.auctions.pop();
            return Err(AuctionError::Internal(e));
        }

        info!(
            "{:<12} --> 경매 생성: index={} item={} starting_price={} duration={}s",
            "Ledger", index, item, starting_price, duration_secs
        );
        Ok(index)
    }

    /// 구매(낙찰) 처리
    /// 가격 계산, 검증, 상태 전이, 정산 분할, 감사 기록을
    /// 쓰기 잠금 안에서 하나의 원자적 단위로 적용한다.
    pub async fn buy(
        &self,
        index: u64,
        amount: u64,
        buyer: &str,
    ) -> Result<Settlement, AuctionError> {
        let mut state = self.state.write().await;
        // 가격과 기한은 쓰기 잠금 안에서 관측한 시각으로 판정한다
        let now = self.clock.now();

        let auction = state
            .auctions
            .get(index as usize)
            .ok_or(AuctionError::NotFound)?;

        // 이미 낙찰된 경매는 AuctionStopped, 기한이 지난 경매는 AuctionEnded로 거부
        let price = pricing::current_price(auction, now)?;
        if amount < price {
            return Err(AuctionError::InsufficientFunds);
        }

        let fee = (price as u128 * self.config.fee_percent as u128 / 100) as u64;
        let settlement = Settlement {
            index,
            final_price: price,
            fee,
            seller_proceeds: price - fee,
            refund: amount - price,
            seller: auction.seller.clone(),
            winner: buyer.to_string(),
        };

        let ended = LedgerEvent::AuctionEnded {
            index,
            final_price: price,
            winner: buyer.to_string(),
            timestamp: now,
        };
        let envelope = Event::from_ledger_event(&ended, 2).map_err(AuctionError::Internal)?;

        // 상태 전이: Active -> Stopped (단 한 번)
        {
            let auction = &mut state.auctions[index as usize];
            auction.stopped = true;
            auction.final_price = price;
        }
        if let Err(e) = self.event_store.append_and_publish_event(envelope).await {
            // 부분 정산 금지: 기록 실패 시 상태 전이를 되돌린다
            let auction = &mut state.auctions[index as usize];
            auction.stopped = false;
            auction.final_price = auction.starting_price;
            return Err(AuctionError::Internal(e));
        }

        info!(
            "{:<12} --> 낙찰: index={} final_price={} fee={} refund={} winner={}",
            "Ledger", index, settlement.final_price, settlement.fee, settlement.refund, buyer
        );
        Ok(settlement)
    }

    /// 현재 가격 조회
    pub async fn price_for(&self, index: u64) -> Result<u64, AuctionError> {
        let state = self.state.read().await;
        let now = self.clock.now();
        let auction = state
            .auctions
            .get(index as usize)
            .ok_or(AuctionError::NotFound)?;
        pricing::current_price(auction, now)
    }

    /// 경매 단건 조회
    pub async fn get_auction(&self, index: u64) -> Result<Auction, AuctionError> {
        let state = self.state.read().await;
        state
            .auctions
            .get(index as usize)
            .cloned()
            .ok_or(AuctionError::NotFound)
    }

    /// 전체 경매 스냅샷 조회(인덱스 0부터, 유한 시퀀스)
    pub async fn all_auctions(&self) -> Vec<Auction> {
        self.state.read().await.auctions.clone()
    }

    /// 경매 개수 조회
    pub async fn auction_count(&self) -> u64 {
        self.state.read().await.auctions.len() as u64
    }

    /// 관리 소유자 조회(초기화 시 한 번 설정, 이후 읽기 전용)
    pub fn owner(&self) -> &str {
        &self.config.owner
    }

    /// 수수료율 조회
    pub fn fee_percent(&self) -> u64 {
        self.config.fee_percent
    }

    /// 기본 기간 조회
    pub fn default_duration_secs(&self) -> u64 {
        self.config.default_duration_secs
    }
}

// endregion: --- Ledger Manager
