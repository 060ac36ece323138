//! Utility functions shared across the backend

pub mod email;

pub use email::{is_valid_email, mask_email, normalize_email};
