//! Config module tests
//!
//! - Configuration manager tests (path expansion, loading, writing)
//! - Settings tests (defaults, validation, menu conversion)

#[cfg(test)]
mod settings_tests;
