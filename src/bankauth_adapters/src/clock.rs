use std::sync::Arc;

use arc_swap::ArcSwap;
use bankauth_core::Clock;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<ArcSwap<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(ArcSwap::from_pointee(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.rcu(|current| Arc::new(**current + by));
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.now.store(Arc::new(to));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        **self.now.load()
    }
}
