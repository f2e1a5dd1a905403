use bankauth_core::{AuthError, CredentialStore, Identified, Identity, IdentityDirectory, Password};

/// Register use case - adds an identity to the directory with its initial password
pub struct RegisterUseCase<'a, D, C>
where
    D: IdentityDirectory,
    C: CredentialStore,
{
    directory: &'a D,
    credential_store: &'a C,
}

impl<'a, D, C> RegisterUseCase<'a, D, C>
where
    D: IdentityDirectory,
    C: CredentialStore,
{
    pub fn new(directory: &'a D, credential_store: &'a C) -> Self {
        Self {
            directory,
            credential_store,
        }
    }

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `identity` - Teller or customer to add
    /// * `password` - Initial password, checked against the credential store's policy
    ///
    /// # Returns
    /// Ok(()) on success. `Conflict` if the email is taken, `InvalidInput` if the
    /// password is rejected, in which case the identity is removed again.
    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip_all,
        fields(role = %identity.role())
    )]
    pub async fn execute(&self, identity: Identity, password: Password) -> Result<(), AuthError> {
        let email = identity.email().clone();
        self.directory.add(identity).await?;

        if let Err(e) = self.credential_store.set_password(&email, password).await {
            tracing::warn!(error = %e, "Initial password rejected, rolling back registration");
            self.directory.remove(&email).await?;
            return Err(e.into());
        }

        tracing::info!("Identity registered");
        Ok(())
    }
}
