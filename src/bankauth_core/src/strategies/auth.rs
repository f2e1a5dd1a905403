use async_trait::async_trait;

use crate::{
    domain::{password::Password, session::SessionToken},
    error::AuthError,
};

// ============================================================================
// Auth Capability Trait
// ============================================================================

/// The sign-in contract shared by every person-like entity.
///
/// Tellers and customers do not implement this themselves. They are bound to
/// a shared capability that owns the credential and session stores, and the
/// binding implements `Auth` on their behalf.
#[async_trait]
pub trait Auth: Send + Sync {
    /// Verify `password` and open the entity's session.
    ///
    /// Fails with `AuthenticationFailed` on a wrong password or an identity
    /// without a credential, and with `AlreadyActive` when a live session
    /// already exists.
    async fn sign_in(&self, password: Password) -> Result<SessionToken, AuthError>;

    /// End the session behind `token`. Unknown or expired tokens are `NotFound`.
    async fn sign_out(&self, token: &SessionToken) -> Result<(), AuthError>;

    /// Re-check `password` without touching any session.
    ///
    /// Intended for confirming sensitive actions while already signed in.
    async fn validate_password(&self, password: &Password) -> Result<(), AuthError>;

    /// Replace the password after re-checking the current one.
    async fn change_password(
        &self,
        old_password: &Password,
        new_password: Password,
    ) -> Result<(), AuthError>;
}
