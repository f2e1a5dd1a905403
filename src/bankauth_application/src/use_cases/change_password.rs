use bankauth_core::{
    AuthError, CredentialStore, Email, Identified, IdentityDirectory, Password, SessionStore,
};

use crate::capability::AuthCapability;

/// Change password use case - rotates a password after checking the current one
pub struct ChangePasswordUseCase<'a, D, C, S>
where
    D: IdentityDirectory,
    C: CredentialStore,
    S: SessionStore,
{
    directory: &'a D,
    capability: &'a AuthCapability<C, S>,
}

impl<'a, D, C, S> ChangePasswordUseCase<'a, D, C, S>
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

    /// Execute the change password use case
    ///
    /// # Arguments
    /// * `email` - Identity whose password changes
    /// * `old_password` - Current password
    /// * `new_password` - Replacement, subject to the password policy
    ///
    /// # Returns
    /// Ok(()) on success, `Unauthorized` if `old_password` does not match,
    /// `InvalidInput` if the replacement is rejected, `NotFound` for an unknown email
    #[tracing::instrument(name = "ChangePasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        old_password: Password,
        new_password: Password,
    ) -> Result<(), AuthError> {
        let identity = self.directory.find_by_email(&email).await?;

        self.capability
            .change_password(identity.email(), &old_password, new_password)
            .await
    }
}
