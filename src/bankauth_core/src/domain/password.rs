use secrecy::{ExposeSecret, Secret};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },
}

/// A plaintext password supplied by a caller.
///
/// Only emptiness is checked on construction. Length rules belong to the
/// [`PasswordPolicy`] of whichever store is about to persist it, so a short
/// password can still be presented at sign-in and simply fail to match.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Number of characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.expose_secret().chars().count()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Password {
    type Error = PasswordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(Secret::new(value.to_owned()))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    pub const DEFAULT_MIN_LENGTH: usize = 8;

    pub fn new(min_length: usize) -> Self {
        Self {
            min_length: min_length.max(1),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn check(&self, password: &Password) -> Result<(), PasswordError> {
        if password.char_count() < self.min_length {
            return Err(PasswordError::TooShort {
                min_length: self.min_length,
            });
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LENGTH)
    }
}
