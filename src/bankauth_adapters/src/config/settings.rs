use std::time::Duration as StdDuration;

use bankauth_core::PasswordPolicy;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use super::constants::{defaults, env, limits, test};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthSettings {
    pub password: PasswordSettings,
    pub session: SessionSettings,
    pub hashing: HashingSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PasswordSettings {
    pub min_length: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessionSettings {
    pub ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl AuthSettings {
    /// Loads settings from built-in defaults, an optional `bankauth.{json,toml,..}`
    /// in the working directory and `BANKAUTH__SECTION__KEY` environment variables,
    /// in increasing order of precedence. A `.env` file is read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::load_with(Self::environment())
    }

    /// Builds settings from a JSON document layered over the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = Self::with_defaults()?
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values the stores cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ttl = self.session.ttl_secs;
        if ttl == 0 || ttl > limits::MAX_SESSION_TTL_SECS {
            return Err(ConfigError::Message(format!(
                "session.ttl_secs must be between 1 and {}, got {ttl}",
                limits::MAX_SESSION_TTL_SECS
            )));
        }
        Ok(())
    }

    /// Defaults with hashing cost turned down for test suites.
    pub fn for_tests() -> Self {
        Self {
            hashing: HashingSettings {
                memory_kib: test::hashing::MEMORY_KIB,
                iterations: test::hashing::ITERATIONS,
                parallelism: test::hashing::PARALLELISM,
            },
            ..Self::default()
        }
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(self.password.min_length)
    }

    /// Session lifetime, kept within `1..=MAX_SESSION_TTL_SECS` even for
    /// settings that skipped [`AuthSettings::validate`].
    pub fn session_ttl(&self) -> chrono::Duration {
        let secs = self
            .session
            .ttl_secs
            .clamp(1, limits::MAX_SESSION_TTL_SECS);
        i64::try_from(secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    pub fn sweep_interval(&self) -> StdDuration {
        StdDuration::from_secs(self.session.sweep_interval_secs.max(1))
    }

    fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .separator(env::ENV_SEPARATOR)
            .try_parsing(true)
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Self = Self::with_defaults()?
            .add_source(File::with_name(env::CONFIG_FILE_NAME).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn with_defaults() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("password.min_length", defaults::PASSWORD_MIN_LENGTH as u64)?
            .set_default("session.ttl_secs", defaults::SESSION_TTL_SECS)?
            .set_default(
                "session.sweep_interval_secs",
                defaults::SESSION_SWEEP_INTERVAL_SECS,
            )?
            .set_default("hashing.memory_kib", defaults::HASHING_MEMORY_KIB as u64)?
            .set_default("hashing.iterations", defaults::HASHING_ITERATIONS as u64)?
            .set_default("hashing.parallelism", defaults::HASHING_PARALLELISM as u64)
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            password: PasswordSettings {
                min_length: defaults::PASSWORD_MIN_LENGTH,
            },
            session: SessionSettings {
                ttl_secs: defaults::SESSION_TTL_SECS,
                sweep_interval_secs: defaults::SESSION_SWEEP_INTERVAL_SECS,
            },
            hashing: HashingSettings {
                memory_kib: defaults::HASHING_MEMORY_KIB,
                iterations: defaults::HASHING_ITERATIONS,
                parallelism: defaults::HASHING_PARALLELISM,
            },
        }
    }
}
