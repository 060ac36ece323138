//! Tests for the session token module
