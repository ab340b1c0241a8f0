//! Core module tests
//!
//! Contains test suites for the overlay lifecycle:
//! - Outside-click detection tests
//! - Transition timing and cancellation tests
//! - Overlay controller tests
//! - Header composition scenarios

#[cfg(test)]
mod header_tests;
#[cfg(test)]
mod overlay_tests;
#[cfg(test)]
mod transition_tests;
