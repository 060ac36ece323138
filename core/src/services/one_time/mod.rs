//! Single-use token module
//!
//! Password reset and email verification tokens, plus MFA codes, live in the
//! TTL store and are consumable at most once.

mod service;

#[cfg(test)]
mod tests;

pub use service::OneTimeTokenManager;
