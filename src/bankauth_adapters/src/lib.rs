pub mod clock;
pub mod config;
pub mod hashing;
pub mod persistence;

pub use clock::{ManualClock, SystemClock};
pub use config::AuthSettings;
pub use hashing::Argon2Hasher;
pub use persistence::{Bank, DashMapCredentialStore, HashMapSessionStore};
