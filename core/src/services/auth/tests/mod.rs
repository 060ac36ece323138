//! Tests for the authentication module


#[cfg(test)]
mod lockout_tests;
#[cfg(test)]
mod service_tests;
