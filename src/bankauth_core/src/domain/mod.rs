pub mod address;
pub mod credential;
pub mod email;
pub mod identity;
pub mod password;
pub mod session;
