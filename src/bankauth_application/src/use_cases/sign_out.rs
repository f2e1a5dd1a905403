use bankauth_core::{AuthError, SessionStore, SessionToken};

/// Sign-out use case - closes the session behind a token
pub struct SignOutUseCase<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }

    /// Execute the sign-out use case
    ///
    /// # Arguments
    /// * `token` - Token returned by sign-in
    ///
    /// # Returns
    /// Ok(()) on success, `NotFound` if the token is unknown, already closed or expired
    #[tracing::instrument(name = "SignOutUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &SessionToken) -> Result<(), AuthError> {
        self.session_store.close(token).await?;
        tracing::info!("Session closed");
        Ok(())
    }
}
