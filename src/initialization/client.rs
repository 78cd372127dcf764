//! HTTP client initialization.
//!
//! This module provides the function that builds the `reqwest::Client` used for
//! HEAD requests during redirect resolution.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::ResolverConfig;

/// Initializes a shared HTTP client for redirect resolution.
///
/// Creates a `reqwest::Client` with redirects disabled so every hop is seen by
/// the resolver and checked against its redirect policy before it is followed.
///
/// # Arguments
///
/// * `config` - Resolver configuration containing user-agent, timeout and proxy settings
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ResolverConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let mut builder = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone());
    if config.no_proxy {
        builder = builder.no_proxy();
    }
    Ok(Arc::new(builder.build()?))
}
