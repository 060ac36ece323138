//! Configuration for the authentication service

use ch_shared::config::LockoutConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Account lockout policy
    pub lockout: LockoutConfig,
    /// Bcrypt cost used when hashing new passwords
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            lockout: LockoutConfig::default(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}
