//! Resolver configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, redirect status codes)
//! - The library configuration struct
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt, ResolverConfig};
