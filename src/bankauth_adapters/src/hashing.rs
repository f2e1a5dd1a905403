use argon2::{Algorithm, Argon2, Params, Version};
use bankauth_core::Password;
use rand::RngCore;
use secrecy::ExposeSecret;

use crate::config::{HashingSettings, constants::hashing::{HASH_LEN, SALT_LEN}};

/// Argon2id key derivation over raw salt bytes.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new(settings: &HashingSettings) -> Result<Self, argon2::Error> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            Some(HASH_LEN),
        )?;
        Ok(Self { params })
    }

    pub fn generate_salt() -> Vec<u8> {
        let mut salt = vec![0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);
        salt
    }

    /// Derives the hash of `password` under `salt` on the blocking pool.
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    pub async fn hash(&self, password: Password, salt: Vec<u8>) -> Result<Vec<u8>, String> {
        let params = self.params.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let mut output = vec![0u8; HASH_LEN];
                Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                    .hash_password_into(
                        password.as_ref().expose_secret().as_bytes(),
                        &salt,
                        &mut output,
                    )
                    .map_err(|e| e.to_string())?;
                Ok::<_, String>(output)
            })
        })
        .await
        .map_err(|e| e.to_string())?;

        result
    }
}
