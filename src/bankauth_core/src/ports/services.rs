use chrono::{DateTime, Utc};

/// Port trait for the source of "now" used by session expiry
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
