//! # CourseHub Core
//!
//! Core business logic and security domain layer for the CourseHub backend.
//! This crate contains domain entities, authentication and session services,
//! store/repository interfaces, and error types that form the foundation of
//! the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod stores;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
pub use stores::*;
