//! redirect_resolver library: find the target URL at the end of a redirect chain
//!
//! This library follows HTTP redirects with HEAD requests, so response bodies are
//! never downloaded, and guards against three pathological server behaviours:
//! chains that are too long, chains that loop back to a visited URL, and
//! responses of unbounded size (chunked transfer encoding).
//!
//! # Example
//!
//! ```no_run
//! use redirect_resolver::{ResolveError, Resolver, ResolverConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Resolver::new(ResolverConfig {
//!     max_redirects: 5,
//!     ..Default::default()
//! })?;
//!
//! match resolver.resolve("https://example.com/short").await {
//!     Ok(target) => println!("{}", target),
//!     Err(ResolveError::CyclicRedirect { url }) => eprintln!("loop at {}", url),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Resolving is async and requires a Tokio runtime. The network layer is
//! pluggable through the [`HttpClient`] trait; [`Resolver::new`] uses the
//! bundled reqwest client.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt, ResolverConfig};
pub use error_handling::{FailureKind, InitializationError, ResolveError};
pub use fetch::{
    HttpClient, RedirectAttempt, RedirectHook, RedirectPolicy, RedirectState, ReqwestClient,
    Resolution, Resolver, ResponseHead,
};
