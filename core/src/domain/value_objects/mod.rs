//! Value objects shared across services.

pub mod token_pair;

pub use token_pair::TokenPair;
