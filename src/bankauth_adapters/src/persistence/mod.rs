pub mod bank;
pub mod dashmap_credential_store;
pub mod hashmap_session_store;

pub use bank::Bank;
pub use dashmap_credential_store::DashMapCredentialStore;
pub use hashmap_session_store::HashMapSessionStore;
