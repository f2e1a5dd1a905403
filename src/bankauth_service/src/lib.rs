pub mod auth_service;
pub mod sweeper;
pub mod telemetry;

pub use auth_service::AuthService;
pub use sweeper::spawn_session_sweeper;
pub use telemetry::init_tracing;
