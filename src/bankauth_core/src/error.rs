use thiserror::Error;

use crate::{
    domain::{email::EmailError, password::PasswordError},
    ports::repositories::{CredentialStoreError, DirectoryError, SessionStoreError},
};

/// Failure categories a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    InvalidInput,
    NotFound,
    Conflict,
    AlreadyActive,
    Unauthorized,
    AuthenticationFailed,
    Unexpected,
}

/// Error returned by every authentication use case.
///
/// `AuthenticationFailed` is shared by "unknown identity" and "wrong
/// password" and its message names neither.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0} already exists")]
    Conflict(&'static str),
    #[error("A session is already active; sign out first")]
    AlreadyActive,
    #[error("Current password does not match")]
    Unauthorized,
    #[error("Authentication failed")]
    AuthenticationFailed,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::InvalidInput(_) => AuthErrorKind::InvalidInput,
            Self::NotFound(_) => AuthErrorKind::NotFound,
            Self::Conflict(_) => AuthErrorKind::Conflict,
            Self::AlreadyActive => AuthErrorKind::AlreadyActive,
            Self::Unauthorized => AuthErrorKind::Unauthorized,
            Self::AuthenticationFailed => AuthErrorKind::AuthenticationFailed,
            Self::Unexpected(_) => AuthErrorKind::Unexpected,
        }
    }
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

impl From<EmailError> for AuthError {
    fn from(error: EmailError) -> Self {
        Self::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(error: PasswordError) -> Self {
        Self::InvalidInput(error.to_string())
    }
}

impl From<DirectoryError> for AuthError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::IdentityAlreadyExists => Self::Conflict("Identity"),
            DirectoryError::IdentityNotFound => Self::NotFound("Identity"),
        }
    }
}

impl From<CredentialStoreError> for AuthError {
    fn from(error: CredentialStoreError) -> Self {
        match error {
            CredentialStoreError::CredentialNotFound => Self::NotFound("Credential"),
            CredentialStoreError::InvalidPassword(e) => Self::InvalidInput(e.to_string()),
            CredentialStoreError::IncorrectPassword => Self::Unauthorized,
            CredentialStoreError::UnexpectedError(e) => Self::Unexpected(e),
        }
    }
}

impl From<SessionStoreError> for AuthError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            SessionStoreError::AlreadyActive => Self::AlreadyActive,
            SessionStoreError::SessionNotFound => Self::NotFound("Session"),
            SessionStoreError::UnexpectedError(e) => Self::Unexpected(e),
        }
    }
}
