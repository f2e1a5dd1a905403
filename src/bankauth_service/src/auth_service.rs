use std::sync::Arc;
use std::time::Duration;

use bankauth_adapters::{
    Argon2Hasher, AuthSettings, Bank, DashMapCredentialStore, HashMapSessionStore, SystemClock,
};
use bankauth_application::{
    AuthCapability, ChangePasswordUseCase, RegisterUseCase, SignInUseCase, SignOutUseCase,
    ValidatePasswordUseCase, VerifySessionUseCase,
};
use bankauth_core::{
    AuthError, Clock, CredentialStore, Email, Identity, IdentityDirectory, Password, Session,
    SessionStore, SessionToken,
};
use tokio::task::JoinHandle;

use crate::sweeper::spawn_session_sweeper;

/// Entry point of the authentication core.
///
/// Wires the bank's directory to the credential and session stores and
/// exposes every flow keyed by email or token. A transport layer would wrap
/// this type; nothing here does I/O.
#[derive(Clone)]
pub struct AuthService<D, C, S>
where
    D: IdentityDirectory,
    C: CredentialStore,
    S: SessionStore,
{
    directory: D,
    capability: AuthCapability<C, S>,
    sweep_interval: Duration,
}

impl AuthService<Bank, DashMapCredentialStore, HashMapSessionStore> {
    /// Builds the in-memory service for `bank` from loaded settings.
    pub fn in_memory(bank: Bank, settings: &AuthSettings) -> Result<Self, AuthError> {
        Self::in_memory_with_clock(bank, settings, Arc::new(SystemClock))
    }

    pub fn in_memory_with_clock(
        bank: Bank,
        settings: &AuthSettings,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AuthError> {
        settings
            .validate()
            .map_err(|e| AuthError::InvalidInput(e.to_string()))?;
        let hasher = Argon2Hasher::new(&settings.hashing)
            .map_err(|e| AuthError::Unexpected(format!("invalid hashing settings: {e}")))?;
        let credential_store = DashMapCredentialStore::with_clock(
            hasher,
            settings.password_policy(),
            Arc::clone(&clock),
        );
        let session_store = HashMapSessionStore::with_clock(settings.session_ttl(), clock);

        Ok(Self::new(
            bank,
            AuthCapability::new(credential_store, session_store),
            settings.sweep_interval(),
        ))
    }
}

impl<D, C, S> AuthService<D, C, S>
where
    D: IdentityDirectory + Clone + 'static,
    C: CredentialStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    /// Create a new AuthService from a directory and a capability
    ///
    /// # Arguments
    /// * `directory` - Where identities are resolved by email
    /// * `capability` - Credential and session stores shared by every identity
    /// * `sweep_interval` - Period of the background expiry sweep
    pub fn new(directory: D, capability: AuthCapability<C, S>, sweep_interval: Duration) -> Self {
        Self {
            directory,
            capability,
            sweep_interval,
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// The shared capability, for binding tellers and customers directly.
    pub fn capability(&self) -> &AuthCapability<C, S> {
        &self.capability
    }

    pub async fn register(
        &self,
        identity: impl Into<Identity>,
        password: Password,
    ) -> Result<(), AuthError> {
        let identity = identity.into();
        RegisterUseCase::new(&self.directory, self.capability.credential_store())
            .execute(identity, password)
            .await
    }

    pub async fn find_by_email(&self, email: &Email) -> Result<Identity, AuthError> {
        Ok(self.directory.find_by_email(email).await?)
    }

    pub async fn sign_in(&self, email: Email, password: Password) -> Result<SessionToken, AuthError> {
        SignInUseCase::new(&self.directory, &self.capability)
            .execute(email, password)
            .await
    }

    pub async fn sign_out(&self, token: &SessionToken) -> Result<(), AuthError> {
        SignOutUseCase::new(self.capability.session_store().clone())
            .execute(token)
            .await
    }

    pub async fn validate_password(&self, email: Email, password: Password) -> Result<(), AuthError> {
        ValidatePasswordUseCase::new(&self.directory, &self.capability)
            .execute(email, password)
            .await
    }

    pub async fn change_password(
        &self,
        email: Email,
        old_password: Password,
        new_password: Password,
    ) -> Result<(), AuthError> {
        ChangePasswordUseCase::new(&self.directory, &self.capability)
            .execute(email, old_password, new_password)
            .await
    }

    pub async fn verify_session(&self, token: &SessionToken) -> Result<Session, AuthError> {
        VerifySessionUseCase::new(self.capability.session_store().clone())
            .execute(token)
            .await
    }

    pub async fn is_active(&self, email: &Email) -> bool {
        self.capability.session_store().is_active(email).await
    }

    pub async fn sweep_expired(&self) -> usize {
        self.capability.session_store().sweep_expired().await
    }

    /// Start the periodic expiry sweep on the current runtime.
    ///
    /// Abort the returned handle to stop it.
    pub fn spawn_session_sweeper(&self) -> JoinHandle<()> {
        spawn_session_sweeper(self.capability.session_store().clone(), self.sweep_interval)
    }
}
