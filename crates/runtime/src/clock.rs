//! Time sources for the frame driver.
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::time::Instant;
use wheel_core::Millis;

/// Monotonic millisecond clock sampled once per frame.
pub trait Clock: Send + Sync {
    fn now(&self) -> Millis;
}

/// Milliseconds since the clock was created, read from tokio's clock so a
/// paused test runtime controls it.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        let elapsed = self.origin.elapsed().as_millis();
        Millis(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }
}

/// Clock moved by hand. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start.0)),
        }
    }

    pub fn set(&self, now: Millis) {
        self.now.store(now.0, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) -> Millis {
        let previous = self.now.fetch_add(ms, Ordering::SeqCst);
        Millis(previous.saturating_add(ms))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.now.load(Ordering::SeqCst))
    }
}
