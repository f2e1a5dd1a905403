//! # Bankauth - Bank Identity Authentication Library
//!
//! This is a facade crate that re-exports the public APIs of the bankauth components.
//! Use this crate to get tellers and customers signing in from one place.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bankauth::{Address, AuthService, AuthSettings, Bank, Customer, Email, Password, Person};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = AuthSettings::load()?;
//! let address = Address::new("1 Main St", "Springfield", "IL", "62701", "US");
//! let bank = Bank::new(1, "First Springfield", address.clone());
//! let service = AuthService::in_memory(bank, &settings)?;
//!
//! let email = Email::try_from("ada@example.com")?;
//! let ada = Customer::new(Person::new("Ada", email.clone(), address), "C-1");
//! service.register(ada, Password::try_from("hunter22")?).await?;
//!
//! let token = service.sign_in(email, Password::try_from("hunter22")?).await?;
//! service.sign_out(&token).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Teller`, `Customer`, `Session`, etc.
//! - **Port traits**: `CredentialStore`, `SessionStore`, `IdentityDirectory`, `Clock`
//! - **Use cases**: `RegisterUseCase`, `SignInUseCase`, etc.
//! - **Adapters**: `Bank`, `DashMapCredentialStore`, `HashMapSessionStore`, `Argon2Hasher`
//! - **Service**: `AuthService` - The main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use bankauth_core::*;
}

// Re-export most commonly used core types at the root level
pub use bankauth_core::{
    Address, Auth, AuthError, AuthErrorKind, Credential, Customer, Email, EmailError, Identified,
    Identity, Password, PasswordError, PasswordPolicy, Person, Role, Session, SessionToken,
    Teller,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and service trait definitions
pub mod ports {
    pub use bankauth_core::{
        Clock, CredentialStore, CredentialStoreError, DirectoryError, IdentityDirectory,
        SessionStore, SessionStoreError,
    };
}

pub use ports::{
    Clock, CredentialStore, CredentialStoreError, DirectoryError, IdentityDirectory, SessionStore,
    SessionStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use bankauth_application::*;
}

pub use bankauth_application::{
    AuthCapability, BoundAuth, ChangePasswordUseCase, RegisterUseCase, SignInUseCase,
    SignOutUseCase, ValidatePasswordUseCase, VerifySessionUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// In-memory stores and the bank directory
    pub mod persistence {
        pub use bankauth_adapters::persistence::*;
    }

    /// Settings and constants
    pub mod config {
        pub use bankauth_adapters::config::*;
    }

    pub use bankauth_adapters::{clock, hashing};
}

pub use bankauth_adapters::{
    Argon2Hasher, AuthSettings, Bank, DashMapCredentialStore, HashMapSessionStore, ManualClock,
    SystemClock,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use bankauth_service::{AuthService, init_tracing, spawn_session_sweeper};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
