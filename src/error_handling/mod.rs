//! Error handling.
//!
//! This module provides:
//! - The error returned by a resolve call, with its three classified failures
//! - Initialization errors for the logger and HTTP client
//!
//! Classified failures are:
//! - **TooManyRedirects**: the chain is longer than `max_redirects`
//! - **CyclicRedirect**: the chain returns to a URL it already visited
//! - **UnlimitedContent**: a response declared chunked transfer encoding

mod types;

// Re-export public API
pub use types::{FailureKind, InitializationError, ResolveError};
