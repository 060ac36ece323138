//! Fixed-window rate limiter

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::warn;

use ch_shared::config::RateLimitConfig;

use crate::errors::{AuthError, DomainResult};

use super::client::EndpointClass;

/// Outcome of an admitted request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Requests left for this counter in the current window
    pub remaining: u32,
}

/// Rate limiting service trait
#[async_trait]
pub trait RateLimiterTrait: Send + Sync {
    /// Admit or reject a request for the given client and endpoint tier
    ///
    /// Rejection is `AuthError::RateLimitExceeded` carrying the seconds
    /// until the current window resets.
    async fn admit(
        &self,
        client_key: &str,
        endpoint: EndpointClass,
    ) -> DomainResult<RateLimitDecision>;
}

struct WindowState {
    counts: HashMap<String, u32>,
    window_start: DateTime<Utc>,
}

/// In-memory fixed-window rate limiter
///
/// One mutex guards the counter map and the window start. All counters share
/// the window: when any request crosses the boundary the whole map is
/// cleared, so every client starts the new window at zero simultaneously.
pub struct FixedWindowRateLimiter {
    state: Mutex<WindowState>,
    config: RateLimitConfig,
}

impl FixedWindowRateLimiter {
    /// Creates a new limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            state: Mutex::new(WindowState {
                counts: HashMap::new(),
                window_start: Utc::now(),
            }),
            config,
        }
    }

    fn capacity_for(&self, endpoint: EndpointClass) -> u32 {
        match endpoint {
            EndpointClass::Auth => self.config.auth_requests_per_window,
            EndpointClass::Public => self.config.public_requests_per_window,
            EndpointClass::Admin => self.config.admin_requests_per_window,
            EndpointClass::Default => self.config.default_requests_per_window,
        }
    }

    pub(crate) async fn admit_at(
        &self,
        client_key: &str,
        endpoint: EndpointClass,
        now: DateTime<Utc>,
    ) -> DomainResult<RateLimitDecision> {
        let capacity = self.capacity_for(endpoint);
        if !self.config.enabled {
            return Ok(RateLimitDecision {
                remaining: capacity,
            });
        }

        let window = Duration::seconds(self.config.window_seconds as i64);
        let mut state = self.state.lock().await;

        if now >= state.window_start + window {
            state.counts.clear();
            state.window_start = now;
        }
        let window_start = state.window_start;

        let key = format!("{}:{}", client_key, endpoint.as_str());
        let count = state.counts.entry(key).or_insert(0);
        *count += 1;

        if *count > capacity {
            let retry_after = (window_start + window - now).num_seconds().max(1) as u64;
            warn!(
                client = client_key,
                endpoint = endpoint.as_str(),
                count = *count,
                capacity = capacity,
                "Rate limit exceeded"
            );
            return Err(AuthError::RateLimitExceeded {
                retry_after_seconds: retry_after,
            }
            .into());
        }

        Ok(RateLimitDecision {
            remaining: capacity - *count,
        })
    }
}

#[async_trait]
impl RateLimiterTrait for FixedWindowRateLimiter {
    async fn admit(
        &self,
        client_key: &str,
        endpoint: EndpointClass,
    ) -> DomainResult<RateLimitDecision> {
        self.admit_at(client_key, endpoint, Utc::now()).await
    }
}
