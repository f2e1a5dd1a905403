use std::fmt;

use chrono::{DateTime, Utc};
use subtle::ConstantTimeEq;

/// Stored secret material behind an identity's password.
pub struct Credential {
    password_hash: Vec<u8>,
    salt: Vec<u8>,
    updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(password_hash: Vec<u8>, salt: Vec<u8>, updated_at: DateTime<Utc>) -> Self {
        Self {
            password_hash,
            salt,
            updated_at,
        }
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Compares a freshly derived hash with the stored one in constant time.
    pub fn matches(&self, candidate_hash: &[u8]) -> bool {
        self.password_hash.as_slice().ct_eq(candidate_hash).into()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("password_hash", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
