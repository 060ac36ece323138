//! Domain entities representing core business objects.

pub mod one_time_token;
pub mod user;

// Re-export commonly used types
pub use one_time_token::{OneTimeToken, OneTimeTokenPurpose};
pub use user::{User, UserRole, UserStatus};
