//! Request rate limiting
//!
//! A fixed-window limiter with per-tier capacities. All counters share one
//! window; crossing the boundary resets every counter at once.

mod client;
mod limiter;

#[cfg(test)]
mod tests;

pub use client::{classify_endpoint, EndpointClass, RequestContext};
pub use limiter::{FixedWindowRateLimiter, RateLimitDecision, RateLimiterTrait};
