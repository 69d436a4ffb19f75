//! Fundsight Auth — password authentication, opaque session token
//! issuance/validation, and role-scoped dashboard authorization.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthOutput, AuthService, LoginInput, RegisterInput};
