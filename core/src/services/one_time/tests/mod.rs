//! Tests for single-use tokens and MFA codes
