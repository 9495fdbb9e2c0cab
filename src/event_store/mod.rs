// region:    --- Imports
use crate::auction::events::LedgerEvent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

// endregion: --- Imports

// region:    --- Event Model
/// 이벤트 저장소에 저장되는 이벤트 모델
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    pub id: u64,
    pub aggregate_id: u64,
    pub event_type: String,
    pub data: serde_json::Value,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: u64,
}

impl Event {
    /// 도메인 이벤트로부터 저장소 봉투 생성
    /// id는 저장 시점에 저장소가 부여한다.
    pub fn from_ledger_event(event: &LedgerEvent, version: u64) -> Result<Self, String> {
        let timestamp = match event {
            LedgerEvent::AuctionCreated { timestamp, .. } => *timestamp,
            LedgerEvent::AuctionEnded { timestamp, .. } => *timestamp,
        };
        Ok(Event {
            id: 0,
            aggregate_id: event.index(),
            event_type: event.event_type().to_string(),
            data: serde_json::to_value(event).map_err(|e| e.to_string())?,
            timestamp,
            version,
        })
    }
}
// endregion: --- Event Model

// region:    --- Event Store Trait
/// 이벤트 저장소 트레이트
#[async_trait]
pub trait EventStore {
    async fn append_and_publish_event(&self, event: Event) -> Result<(), String>;
}

/// 추가 전용(append-only) 인메모리 이벤트 저장소 구현체
/// 감사 기록은 삭제되지 않으며 사후 조회가 가능하다.
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
}

/// 이벤트 저장소 구현체 메서드 구현
#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append_and_publish_event(&self, mut event: Event) -> Result<(), String> {
        let mut events = self.events.write().await;

        // (aggregate_id, version) 중복은 버전 충돌로 거부
        if events
            .iter()
            .any(|e| e.aggregate_id == event.aggregate_id && e.version == event.version)
        {
            return Err("버전 충돌".to_string());
        }

        event.id = events.len() as u64 + 1;
        info!(
            "{:<12} --> 이벤트 저장: id={} type={} aggregate={}",
            "EventStore", event.id, event.event_type, event.aggregate_id
        );
        events.push(event);
        Ok(())
    }
}

/// 이벤트 저장소 생성 및 조회
impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// 전체 감사 기록 조회(저장 순서 유지)
    pub async fn all_events(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    /// 특정 경매의 감사 기록 조회
    pub async fn events_for(&self, aggregate_id: u64) -> Vec<Event> {
        self.events
            .read()
            .await
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

// endregion: --- Event Store
