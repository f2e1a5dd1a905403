use bankauth_core::{
    Auth, AuthError, CredentialStore, CredentialStoreError, Email, Identified, Password,
    SessionStore, SessionToken,
};

/// Shared sign-in behavior for every identity of the bank.
///
/// Holds the credential and session stores. Entities reach it through
/// [`AuthCapability::bind`], which pairs an entity with the capability and
/// implements [`Auth`] for that pair.
#[derive(Clone)]
pub struct AuthCapability<C, S>
where
    C: CredentialStore,
    S: SessionStore,
{
    credential_store: C,
    session_store: S,
}

impl<C, S> AuthCapability<C, S>
where
    C: CredentialStore,
    S: SessionStore,
{
    pub fn new(credential_store: C, session_store: S) -> Self {
        Self {
            credential_store,
            session_store,
        }
    }

    pub fn credential_store(&self) -> &C {
        &self.credential_store
    }

    pub fn session_store(&self) -> &S {
        &self.session_store
    }

    pub fn bind<'a, P>(&'a self, entity: &'a P) -> BoundAuth<'a, P, C, S>
    where
        P: Identified,
    {
        BoundAuth {
            capability: self,
            entity,
        }
    }

    #[tracing::instrument(name = "AuthCapability::sign_in", skip_all)]
    pub async fn sign_in(&self, email: &Email, password: Password) -> Result<SessionToken, AuthError> {
        self.check_password(email, &password).await?;
        let token = self.session_store.open(email).await?;
        tracing::info!("Session opened");
        Ok(token)
    }

    #[tracing::instrument(name = "AuthCapability::sign_out", skip_all)]
    pub async fn sign_out(&self, token: &SessionToken) -> Result<(), AuthError> {
        self.session_store.close(token).await?;
        tracing::info!("Session closed");
        Ok(())
    }

    #[tracing::instrument(name = "AuthCapability::validate_password", skip_all)]
    pub async fn validate_password(&self, email: &Email, password: &Password) -> Result<(), AuthError> {
        self.check_password(email, password).await
    }

    #[tracing::instrument(name = "AuthCapability::change_password", skip_all)]
    pub async fn change_password(
        &self,
        email: &Email,
        old_password: &Password,
        new_password: Password,
    ) -> Result<(), AuthError> {
        self.credential_store
            .rotate(email, old_password, new_password)
            .await?;
        tracing::info!("Password rotated");
        Ok(())
    }

    /// Produces the sign-in failure for an email the directory does not know.
    ///
    /// One verification still runs so the caller cannot tell this case apart
    /// from a wrong password by timing.
    pub async fn reject_unknown_identity(&self, email: &Email, password: &Password) -> AuthError {
        if let Err(CredentialStoreError::UnexpectedError(e)) =
            self.credential_store.verify(email, password).await
        {
            tracing::error!(error = %e, "Decoy verification failed");
        }
        tracing::warn!("Authentication failed");
        AuthError::AuthenticationFailed
    }

    async fn check_password(&self, email: &Email, password: &Password) -> Result<(), AuthError> {
        match self.credential_store.verify(email, password).await {
            Ok(true) => Ok(()),
            Ok(false) | Err(CredentialStoreError::CredentialNotFound) => {
                tracing::warn!("Authentication failed");
                Err(AuthError::AuthenticationFailed)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// An entity paired with the capability that authenticates it.
pub struct BoundAuth<'a, P, C, S>
where
    P: Identified,
    C: CredentialStore,
    S: SessionStore,
{
    capability: &'a AuthCapability<C, S>,
    entity: &'a P,
}

#[async_trait::async_trait]
impl<'a, P, C, S> Auth for BoundAuth<'a, P, C, S>
where
    P: Identified,
    C: CredentialStore,
    S: SessionStore,
{
    async fn sign_in(&self, password: Password) -> Result<SessionToken, AuthError> {
        self.capability.sign_in(self.entity.email(), password).await
    }

    async fn sign_out(&self, token: &SessionToken) -> Result<(), AuthError> {
        // A token only signs out the entity that owns it.
        let session = self.capability.session_store.resolve(token).await?;
        if session.email() != self.entity.email() {
            return Err(AuthError::NotFound("Session"));
        }
        self.capability.sign_out(token).await
    }

    async fn validate_password(&self, password: &Password) -> Result<(), AuthError> {
        self.capability
            .validate_password(self.entity.email(), password)
            .await
    }

    async fn change_password(
        &self,
        old_password: &Password,
        new_password: Password,
    ) -> Result<(), AuthError> {
        self.capability
            .change_password(self.entity.email(), old_password, new_password)
            .await
    }
}
