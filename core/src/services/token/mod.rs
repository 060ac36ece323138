//! Session token module
//!
//! This module provides JWT-based session management:
//! - Claims encoding and decoding with type enforcement
//! - Access/refresh token pair issuance
//! - Refresh token registry with rotation by overwrite
//! - Logout by registry deletion

mod codec;
mod service;

#[cfg(test)]
mod tests;

pub use codec::{Claims, TokenCodec, TokenType};
pub use service::SessionTokenService;
