//! Business services containing domain logic and use cases.

pub mod auth;
pub mod authorization;
pub mod email;
pub mod one_time;
pub mod rate_limit;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, CredentialVerifier, LoginAttemptGuard, LoginOutcome};
pub use authorization::{require_any_role, require_role, require_self_or_role};
pub use email::EmailServiceTrait;
pub use one_time::OneTimeTokenManager;
pub use rate_limit::{
    classify_endpoint, EndpointClass, FixedWindowRateLimiter, RateLimitDecision, RateLimiterTrait,
    RequestContext,
};
pub use token::{Claims, SessionTokenService, TokenCodec, TokenType};
