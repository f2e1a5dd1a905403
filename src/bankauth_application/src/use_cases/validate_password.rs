use bankauth_core::{
    AuthError, CredentialStore, DirectoryError, Email, Identified, IdentityDirectory, Password,
    SessionStore,
};

use crate::capability::AuthCapability;

/// Validate password use case - re-authenticates without opening a session
pub struct ValidatePasswordUseCase<'a, D, C, S>
where
    D: IdentityDirectory,
    C: CredentialStore,
    S: SessionStore,
{
    directory: &'a D,
    capability: &'a AuthCapability<C, S>,
}

impl<'a, D, C, S> ValidatePasswordUseCase<'a, D, C, S>
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

    /// Execute the validate password use case
    ///
    /// # Arguments
    /// * `email` - Identity to re-authenticate
    /// * `password` - Password to check
    ///
    /// # Returns
    /// Ok(()) when the password matches, `AuthenticationFailed` otherwise.
    /// Existing sessions are never touched.
    #[tracing::instrument(name = "ValidatePasswordUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<(), AuthError> {
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

        self.capability
            .validate_password(identity.email(), &password)
            .await
    }
}
