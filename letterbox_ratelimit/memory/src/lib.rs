use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use letterbox_ratelimit_contracts::RateLimitService;
use letterbox_shared_contracts::time::TimeService;
use tokio::sync::Mutex;

/// Fixed-window request counters held in process memory.
///
/// Counters are volatile: a restart clears them, which is acceptable for
/// advisory abuse prevention. Multi-instance deployments need a shared
/// counter store behind the same contract instead.
#[derive(Debug, Clone)]
pub struct MemoryRateLimiter<Time> {
    time: Time,
    config: MemoryRateLimiterConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct MemoryRateLimiterConfig {
    pub windows: Vec<RateLimitWindow>,
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitWindow {
    pub cap: u64,
    pub period: Duration,
}

#[derive(Debug, Default)]
struct State {
    counters: Mutex<HashMap<String, Vec<WindowCounter>>>,
}

#[derive(Debug, Clone, Copy)]
struct WindowCounter {
    window_start: DateTime<Utc>,
    count: u64,
}

impl<Time> MemoryRateLimiter<Time> {
    pub fn new(time: Time, config: MemoryRateLimiterConfig) -> Self {
        Self {
            time,
            config,
            state: Default::default(),
        }
    }
}

impl<Time> RateLimitService for MemoryRateLimiter<Time>
where
    Time: TimeService,
{
    async fn check(&self, key: String) -> bool {
        let now = self.time.now();

        // Increment-and-check happens under one lock so concurrent requests
        // for the same key cannot both pass the cap.
        let mut counters = self.state.counters.lock().await;
        let slots = counters.entry(key).or_insert_with(|| {
            self.config
                .windows
                .iter()
                .map(|_| WindowCounter {
                    window_start: now,
                    count: 0,
                })
                .collect()
        });

        let mut allowed = true;
        for (slot, window) in slots.iter_mut().zip(&self.config.windows) {
            if now >= slot.window_start + window.period {
                slot.window_start = now;
                slot.count = 0;
            }
            slot.count += 1;
            allowed &= slot.count <= window.cap;
        }
        allowed
    }
}
