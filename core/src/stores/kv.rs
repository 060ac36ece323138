//! Key-value store trait for TTL-scoped entries
//!
//! The refresh token registry and one-time token records live behind this
//! trait. A production deployment backs it with Redis; tests and small
//! deployments use the in-memory implementation.

use async_trait::async_trait;

/// String key-value store with per-entry expiry
///
/// Errors are plain strings: the store is an integration boundary and the
/// services wrap failures into domain errors themselves.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store a value under a key with a TTL in seconds
    ///
    /// Overwrites any existing entry and resets its TTL.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Get the value for a key, if present and not expired
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Delete a key
    ///
    /// Returns true if an entry was removed.
    async fn delete(&self, key: &str) -> Result<bool, String>;

    /// Atomically get and delete the value for a key
    ///
    /// At most one of several concurrent callers observes the value; the
    /// others see `None`. Single-use token consumption relies on this.
    async fn take(&self, key: &str) -> Result<Option<String>, String>;

    /// Remaining TTL in seconds for a key, if present and not expired
    ///
    /// The services never read this back; it is for outer layers that
    /// surface expiry to clients, such as a resend countdown on a pending
    /// verification code.
    async fn ttl(&self, key: &str) -> Result<Option<i64>, String>;
}
