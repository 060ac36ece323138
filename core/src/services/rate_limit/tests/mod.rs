//! Tests for the rate limiter
