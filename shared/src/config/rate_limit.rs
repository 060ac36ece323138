//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// Rate limiting configuration
///
/// Limits are fixed-window counters: every key shares one window and all
/// counters reset together when the window boundary is crossed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    /// Max requests per window for unclassified endpoints
    pub default_requests_per_window: u32,

    /// Max requests per window for authentication endpoints
    pub auth_requests_per_window: u32,

    /// Max requests per window for public (unauthenticated) endpoints
    pub public_requests_per_window: u32,

    /// Max requests per window for admin endpoints
    pub admin_requests_per_window: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            window_seconds: default_window_seconds(),
            default_requests_per_window: 100,
            auth_requests_per_window: 10,
            public_requests_per_window: 200,
            admin_requests_per_window: 500,
        }
    }
}

impl RateLimitConfig {
    /// Create a development configuration (more lenient limits)
    pub fn development() -> Self {
        Self {
            default_requests_per_window: 1000,
            auth_requests_per_window: 100,
            public_requests_per_window: 2000,
            admin_requests_per_window: 5000,
            ..Default::default()
        }
    }

    /// Create a production configuration (default limits)
    pub fn production() -> Self {
        Self::default()
    }
}

fn default_enabled() -> bool {
    true
}

fn default_window_seconds() -> u64 {
    60 // 1 minute
}
