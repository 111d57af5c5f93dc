//! Utility functions
//!
//! Provides logging setup for the console binary.

pub mod logging;
