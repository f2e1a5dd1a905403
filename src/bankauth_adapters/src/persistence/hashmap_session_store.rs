use std::collections::HashMap;
use std::sync::Arc;

use bankauth_core::{Clock, Email, Session, SessionStore, SessionStoreError, SessionToken};
use chrono::Duration;
use tokio::sync::RwLock;

use crate::clock::SystemClock;

#[derive(Debug, Default)]
struct SessionTable {
    by_email: HashMap<Email, Session>,
    by_token: HashMap<SessionToken, Email>,
}

/// In-memory session store.
///
/// Both indexes sit behind one lock, so open, close and sweep each apply as
/// a single step: two racing opens for one email see each other.
#[derive(Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<SessionTable>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl HashMapSessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(SessionTable::default())),
            ttl,
            clock,
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    #[tracing::instrument(name = "Opening session", skip_all)]
    async fn open(&self, email: &Email) -> Result<SessionToken, SessionStoreError> {
        let now = self.clock.now();
        let mut guard = self.sessions.write().await;
        let table = &mut *guard;

        if let Some(existing) = table.by_email.get(email) {
            if !existing.is_expired_at(now) {
                return Err(SessionStoreError::AlreadyActive);
            }
            table.by_token.remove(existing.token());
        }

        let token = SessionToken::new();
        if table.by_token.contains_key(&token) {
            return Err(SessionStoreError::UnexpectedError(
                "session token collision".to_string(),
            ));
        }

        let session = Session::new(email.clone(), token.clone(), now, self.ttl);
        table.by_token.insert(token.clone(), email.clone());
        table.by_email.insert(email.clone(), session);
        Ok(token)
    }

    #[tracing::instrument(name = "Closing session", skip_all)]
    async fn close(&self, token: &SessionToken) -> Result<Session, SessionStoreError> {
        let now = self.clock.now();
        let mut guard = self.sessions.write().await;
        let table = &mut *guard;

        let email = table
            .by_token
            .remove(token)
            .ok_or(SessionStoreError::SessionNotFound)?;
        let session = table
            .by_email
            .remove(&email)
            .ok_or(SessionStoreError::SessionNotFound)?;

        if session.is_expired_at(now) {
            tracing::debug!("Closed token had already expired");
            return Err(SessionStoreError::SessionNotFound);
        }
        Ok(session)
    }

    async fn resolve(&self, token: &SessionToken) -> Result<Session, SessionStoreError> {
        let now = self.clock.now();
        let table = self.sessions.read().await;

        table
            .by_token
            .get(token)
            .and_then(|email| table.by_email.get(email))
            .filter(|session| !session.is_expired_at(now))
            .cloned()
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn is_active(&self, email: &Email) -> bool {
        let now = self.clock.now();
        let table = self.sessions.read().await;
        table
            .by_email
            .get(email)
            .is_some_and(|session| !session.is_expired_at(now))
    }

    async fn active_sessions(&self) -> Vec<Session> {
        let now = self.clock.now();
        let table = self.sessions.read().await;
        let mut sessions: Vec<Session> = table
            .by_email
            .values()
            .filter(|session| !session.is_expired_at(now))
            .cloned()
            .collect();
        sessions.sort_by_key(|session| session.created_at());
        sessions
    }

    #[tracing::instrument(name = "Sweeping expired sessions", skip_all)]
    async fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        let mut guard = self.sessions.write().await;
        let table = &mut *guard;

        let expired: Vec<Email> = table
            .by_email
            .iter()
            .filter(|(_, session)| session.is_expired_at(now))
            .map(|(email, _)| email.clone())
            .collect();

        for email in &expired {
            if let Some(session) = table.by_email.remove(email) {
                table.by_token.remove(session.token());
            }
        }

        if !expired.is_empty() {
            tracing::debug!(removed = expired.len(), "Expired sessions removed");
        }
        expired.len()
    }
}
