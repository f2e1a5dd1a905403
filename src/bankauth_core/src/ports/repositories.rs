use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    email::Email,
    identity::Identity,
    password::{Password, PasswordError},
    session::{Session, SessionToken},
};

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Credential not found")]
    CredentialNotFound,
    #[error("Password rejected: {0}")]
    InvalidPassword(#[from] PasswordError),
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::CredentialNotFound, Self::CredentialNotFound) => true,
            (Self::InvalidPassword(a), Self::InvalidPassword(b)) => a == b,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Replaces (or creates) the credential for `email` after applying the
    /// store's password policy.
    async fn set_password(
        &self,
        email: &Email,
        password: Password,
    ) -> Result<(), CredentialStoreError>;
    async fn verify(&self, email: &Email, password: &Password)
    -> Result<bool, CredentialStoreError>;
    /// Fails with `IncorrectPassword` unless `old_password` verifies first.
    async fn rotate(
        &self,
        email: &Email,
        old_password: &Password,
        new_password: Password,
    ) -> Result<(), CredentialStoreError>;
    async fn remove(&self, email: &Email) -> Result<(), CredentialStoreError>;
    async fn updated_at(&self, email: &Email) -> Result<DateTime<Utc>, CredentialStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("A session is already active for this identity")]
    AlreadyActive,
    #[error("Session not found")]
    SessionNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AlreadyActive, Self::AlreadyActive) => true,
            (Self::SessionNotFound, Self::SessionNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Opens the single session `email` may hold and returns its token.
    async fn open(&self, email: &Email) -> Result<SessionToken, SessionStoreError>;
    /// Ends the session behind `token`, returning it. Expired tokens count as unknown.
    async fn close(&self, token: &SessionToken) -> Result<Session, SessionStoreError>;
    async fn resolve(&self, token: &SessionToken) -> Result<Session, SessionStoreError>;
    async fn is_active(&self, email: &Email) -> bool;
    async fn active_sessions(&self) -> Vec<Session>;
    /// Drops every session past its expiry and reports how many went away.
    async fn sweep_expired(&self) -> usize;
}

// IdentityDirectory port trait and errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Identity already exists")]
    IdentityAlreadyExists,
    #[error("Identity not found")]
    IdentityNotFound,
}

#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    async fn add(&self, identity: Identity) -> Result<(), DirectoryError>;
    async fn find_by_email(&self, email: &Email) -> Result<Identity, DirectoryError>;
    async fn remove(&self, email: &Email) -> Result<Identity, DirectoryError>;
}
