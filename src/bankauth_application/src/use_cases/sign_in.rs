use bankauth_core::{
    AuthError, CredentialStore, DirectoryError, Email, Identified, IdentityDirectory, Password,
    SessionStore, SessionToken,
};

use crate::capability::AuthCapability;

/// Sign-in use case - resolves the identity by email, then authenticates it
pub struct SignInUseCase<'a, D, C, S>
where
    D: IdentityDirectory,
    C: CredentialStore,
    S: SessionStore,
{
    directory: &'a D,
    capability: &'a AuthCapability<C, S>,
}

impl<'a, D, C, S> SignInUseCase<'a, D, C, S>
where
    D: IdentityDirectory,
    C: CredentialStore,
    S: SessionStore,
{
    pub fn new(directory: &'a D, capability: &'a AuthCapability<C, S>) -> Self {
        Self {
            directory,
            capability,
        }
    }

    /// Execute the sign-in use case
    ///
    /// # Arguments
    /// * `email` - Email the identity is registered under
    /// * `password` - Password to check
    ///
    /// # Returns
    /// The new session token. An unknown email and a wrong password both
    /// surface as `AuthenticationFailed`.
    #[tracing::instrument(name = "SignInUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<SessionToken, AuthError> {
        let identity = match self.directory.find_by_email(&email).await {
            Ok(identity) => identity,
            Err(DirectoryError::IdentityNotFound) => {
                return Err(self
                    .capability
                    .reject_unknown_identity(&email, &password)
                    .await);
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(role = %identity.role(), "Identity resolved");
        self.capability.sign_in(identity.email(), password).await
    }
}
