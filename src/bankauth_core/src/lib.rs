pub mod domain;
pub mod error;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    address::Address,
    credential::Credential,
    email::{Email, EmailError},
    identity::{Customer, Identified, Identity, Person, Role, Teller},
    password::{Password, PasswordError, PasswordPolicy},
    session::{Session, SessionToken},
};

pub use error::{AuthError, AuthErrorKind};

pub use ports::{
    repositories::{
        CredentialStore, CredentialStoreError, DirectoryError, IdentityDirectory, SessionStore,
        SessionStoreError,
    },
    services::Clock,
};

pub use strategies::auth::Auth;
