use std::sync::Arc;

use bankauth_core::{
    Clock, Credential, CredentialStore, CredentialStoreError, Email, Password, PasswordPolicy,
};
use chrono::{DateTime, Utc};
use dashmap::{DashMap, mapref::entry::Entry};
use tokio::sync::RwLock;

use crate::{clock::SystemClock, config::constants::hashing::SALT_LEN, hashing::Argon2Hasher};

/// Hashed under when an email has no credential, so the miss costs one hash too.
const DECOY_SALT: [u8; SALT_LEN] = [0x5a; SALT_LEN];

type CredentialSlot = Arc<RwLock<Credential>>;

/// In-memory credential store with one read/write lock per email.
///
/// `verify` shares the lock with other readers; `set_password` and `rotate`
/// hold it exclusively, so a rotation's check-then-replace cannot interleave
/// with another write to the same email.
#[derive(Clone)]
pub struct DashMapCredentialStore {
    credentials: Arc<DashMap<Email, CredentialSlot>>,
    hasher: Argon2Hasher,
    policy: PasswordPolicy,
    clock: Arc<dyn Clock>,
}

impl DashMapCredentialStore {
    pub fn new(hasher: Argon2Hasher, policy: PasswordPolicy) -> Self {
        Self::with_clock(hasher, policy, Arc::new(SystemClock))
    }

    pub fn with_clock(hasher: Argon2Hasher, policy: PasswordPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            credentials: Arc::new(DashMap::new()),
            hasher,
            policy,
            clock,
        }
    }

    fn slot(&self, email: &Email) -> Option<CredentialSlot> {
        self.credentials
            .get(email)
            .map(|entry| Arc::clone(entry.value()))
    }

    async fn derive(&self, password: &Password, salt: &[u8]) -> Result<Vec<u8>, CredentialStoreError> {
        self.hasher
            .hash(password.clone(), salt.to_vec())
            .await
            .map_err(CredentialStoreError::UnexpectedError)
    }

    async fn fresh_credential(&self, password: &Password) -> Result<Credential, CredentialStoreError> {
        let salt = Argon2Hasher::generate_salt();
        let password_hash = self.derive(password, &salt).await?;
        Ok(Credential::new(password_hash, salt, self.clock.now()))
    }
}

#[async_trait::async_trait]
impl CredentialStore for DashMapCredentialStore {
    #[tracing::instrument(name = "Setting password in credential store", skip_all)]
    async fn set_password(
        &self,
        email: &Email,
        password: Password,
    ) -> Result<(), CredentialStoreError> {
        self.policy.check(&password)?;
        let credential = self.fresh_credential(&password).await?;

        let slot = match self.credentials.entry(email.clone()) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(RwLock::new(credential)));
                return Ok(());
            }
        };
        *slot.write().await = credential;
        Ok(())
    }

    #[tracing::instrument(name = "Verifying password against credential store", skip_all)]
    async fn verify(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<bool, CredentialStoreError> {
        let Some(slot) = self.slot(email) else {
            self.derive(password, &DECOY_SALT).await?;
            return Err(CredentialStoreError::CredentialNotFound);
        };

        let credential = slot.read().await;
        let candidate = self.derive(password, credential.salt()).await?;
        Ok(credential.matches(&candidate))
    }

    #[tracing::instrument(name = "Rotating password in credential store", skip_all)]
    async fn rotate(
        &self,
        email: &Email,
        old_password: &Password,
        new_password: Password,
    ) -> Result<(), CredentialStoreError> {
        let slot = self
            .slot(email)
            .ok_or(CredentialStoreError::CredentialNotFound)?;

        let mut credential = slot.write().await;
        let candidate = self.derive(old_password, credential.salt()).await?;
        if !credential.matches(&candidate) {
            return Err(CredentialStoreError::IncorrectPassword);
        }
        self.policy.check(&new_password)?;

        *credential = self.fresh_credential(&new_password).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Removing credential", skip_all)]
    async fn remove(&self, email: &Email) -> Result<(), CredentialStoreError> {
        self.credentials
            .remove(email)
            .map(|_| ())
            .ok_or(CredentialStoreError::CredentialNotFound)
    }

    async fn updated_at(&self, email: &Email) -> Result<DateTime<Utc>, CredentialStoreError> {
        let slot = self
            .slot(email)
            .ok_or(CredentialStoreError::CredentialNotFound)?;
        let credential = slot.read().await;
        Ok(credential.updated_at())
    }
}
