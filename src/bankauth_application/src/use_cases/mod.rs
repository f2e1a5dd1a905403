pub mod change_password;
pub mod register;
pub mod sign_in;
pub mod sign_out;
pub mod validate_password;
pub mod verify_session;

// Re-export for convenience
pub use change_password::ChangePasswordUseCase;
pub use register::RegisterUseCase;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use validate_password::ValidatePasswordUseCase;
pub use verify_session::VerifySessionUseCase;
