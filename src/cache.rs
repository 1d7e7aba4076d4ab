use std::time::{Duration, Instant};

/// Single-value cache with a fixed time-to-live, owned and refreshed by the
/// caller. An expired value simply reads as absent; there is no background
/// invalidation.
#[derive(Debug)]
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Option<(Instant, T)>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    pub fn get(&self) -> Option<&T> {
        self.slot
            .as_ref()
            .and_then(|(stored_at, value)| (stored_at.elapsed() < self.ttl).then_some(value))
    }

    pub fn put(&mut self, value: T) {
        self.slot = Some((Instant::now(), value));
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
