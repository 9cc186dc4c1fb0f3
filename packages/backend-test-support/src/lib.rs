//! Test support utilities for the lovecraft game crate
//!
//! Provides unified logging initialization for integration test binaries and
//! helpers for generating isolated game and player identifiers.

pub mod logging;
pub mod unique_helpers;
