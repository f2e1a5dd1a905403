pub mod capability;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use capability::{AuthCapability, BoundAuth};
pub use use_cases::{
    ChangePasswordUseCase, RegisterUseCase, SignInUseCase, SignOutUseCase,
    ValidatePasswordUseCase, VerifySessionUseCase,
};
