use bankauth_core::{AuthError, Session, SessionStore, SessionToken};

/// Verify session use case - resolves a token to its live session
pub struct VerifySessionUseCase<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> VerifySessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(name = "VerifySessionUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &SessionToken) -> Result<Session, AuthError> {
        Ok(self.session_store.resolve(token).await?)
    }
}
