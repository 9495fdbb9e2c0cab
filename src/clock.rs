// region:    --- Imports
use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

// endregion: --- Imports

// region:    --- Clock

/// 원장에 주입되는 시간 소스
/// 가격은 항상 경과 시간으로부터 즉석 계산되므로 시계가 유일한 시간 기준이다.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 실제 벽시계
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 결정적 테스트용 고정 시계
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// 시계를 지정 시각으로 설정
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    /// 시계를 초 단위로 전진
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now += Duration::seconds(secs);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// endregion: --- Clock
