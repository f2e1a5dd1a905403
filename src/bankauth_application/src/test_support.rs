//! In-memory port implementations shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use bankauth_core::{
    Address, CredentialStore, CredentialStoreError, Customer, DirectoryError, Email, Identified,
    Identity, IdentityDirectory, Password, PasswordPolicy, Person, Session, SessionStore,
    SessionStoreError, SessionToken, Teller,
};
use chrono::{DateTime, Duration, Utc};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

pub fn email(raw: &str) -> Email {
    Email::try_from(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(raw).unwrap()
}

pub fn person(raw_email: &str) -> Person {
    Person::new(
        "Test Person",
        email(raw_email),
        Address::new("1 Main St", "Springfield", "IL", "62701", "US"),
    )
}

pub fn customer(raw_email: &str) -> Customer {
    Customer::new(person(raw_email), "C-0001")
}

pub fn teller(raw_email: &str) -> Teller {
    Teller::new(person(raw_email), "T-0001", "Main")
}

/// Stores plaintext; good enough to drive the use cases.
#[derive(Clone, Default)]
pub struct MockCredentialStore {
    passwords: Arc<RwLock<HashMap<Email, (String, DateTime<Utc>)>>>,
    policy: PasswordPolicy,
}

impl MockCredentialStore {
    pub async fn insert(&self, email: &Email, password: &str) {
        self.passwords
            .write()
            .await
            .insert(email.clone(), (password.to_string(), Utc::now()));
    }

    pub async fn contains(&self, email: &Email) -> bool {
        self.passwords.read().await.contains_key(email)
    }
}

#[async_trait::async_trait]
impl CredentialStore for MockCredentialStore {
    async fn set_password(
        &self,
        email: &Email,
        password: Password,
    ) -> Result<(), CredentialStoreError> {
        self.policy.check(&password)?;
        self.insert(email, password.as_ref().expose_secret()).await;
        Ok(())
    }

    async fn verify(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<bool, CredentialStoreError> {
        let passwords = self.passwords.read().await;
        let (stored, _) = passwords
            .get(email)
            .ok_or(CredentialStoreError::CredentialNotFound)?;
        Ok(stored == password.as_ref().expose_secret())
    }

    async fn rotate(
        &self,
        email: &Email,
        old_password: &Password,
        new_password: Password,
    ) -> Result<(), CredentialStoreError> {
        let mut passwords = self.passwords.write().await;
        let entry = passwords
            .get_mut(email)
            .ok_or(CredentialStoreError::CredentialNotFound)?;
        if entry.0 != *old_password.as_ref().expose_secret() {
            return Err(CredentialStoreError::IncorrectPassword);
        }
        self.policy.check(&new_password)?;
        *entry = (new_password.as_ref().expose_secret().clone(), Utc::now());
        Ok(())
    }

    async fn remove(&self, email: &Email) -> Result<(), CredentialStoreError> {
        self.passwords
            .write()
            .await
            .remove(email)
            .map(|_| ())
            .ok_or(CredentialStoreError::CredentialNotFound)
    }

    async fn updated_at(&self, email: &Email) -> Result<DateTime<Utc>, CredentialStoreError> {
        self.passwords
            .read()
            .await
            .get(email)
            .map(|(_, updated_at)| *updated_at)
            .ok_or(CredentialStoreError::CredentialNotFound)
    }
}

/// Sessions never expire here.
#[derive(Clone, Default)]
pub struct MockSessionStore {
    sessions: Arc<RwLock<HashMap<Email, Session>>>,
}

#[async_trait::async_trait]
impl SessionStore for MockSessionStore {
    async fn open(&self, email: &Email) -> Result<SessionToken, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(email) {
            return Err(SessionStoreError::AlreadyActive);
        }
        let token = SessionToken::new();
        let session = Session::new(email.clone(), token.clone(), Utc::now(), Duration::hours(1));
        sessions.insert(email.clone(), session);
        Ok(token)
    }

    async fn close(&self, token: &SessionToken) -> Result<Session, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let email = sessions
            .values()
            .find(|session| session.token() == token)
            .map(|session| session.email().clone())
            .ok_or(SessionStoreError::SessionNotFound)?;
        sessions
            .remove(&email)
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn resolve(&self, token: &SessionToken) -> Result<Session, SessionStoreError> {
        self.sessions
            .read()
            .await
            .values()
            .find(|session| session.token() == token)
            .cloned()
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn is_active(&self, email: &Email) -> bool {
        self.sessions.read().await.contains_key(email)
    }

    async fn active_sessions(&self) -> Vec<Session> {
        self.sessions.read().await.values().cloned().collect()
    }

    async fn sweep_expired(&self) -> usize {
        0
    }
}

#[derive(Clone, Default)]
pub struct MockDirectory {
    identities: Arc<RwLock<HashMap<Email, Identity>>>,
}

#[async_trait::async_trait]
impl IdentityDirectory for MockDirectory {
    async fn add(&self, identity: Identity) -> Result<(), DirectoryError> {
        let mut identities = self.identities.write().await;
        if identities.contains_key(identity.email()) {
            return Err(DirectoryError::IdentityAlreadyExists);
        }
        identities.insert(identity.email().clone(), identity);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Identity, DirectoryError> {
        self.identities
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(DirectoryError::IdentityNotFound)
    }

    async fn remove(&self, email: &Email) -> Result<Identity, DirectoryError> {
        self.identities
            .write()
            .await
            .remove(email)
            .ok_or(DirectoryError::IdentityNotFound)
    }
}
