//! Shared utilities and common types for the CourseHub backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types for the security core
//! - Error response structures and error codes
//! - Utility functions (email validation, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, JwtConfig, LockoutConfig, OneTimeTokenConfig, RateLimitConfig,
};
pub use errors::{error_codes, ApiResult, ErrorResponse, IntoErrorResponse};
pub use utils::email;
