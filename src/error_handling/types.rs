//! Error type definitions.
//!
//! This module defines the errors surfaced by a resolve call and by resource
//! initialization.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;
use url::Url;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by a resolve call.
///
/// The first three variants are the classified failures of the redirect
/// policy. The rest come from URL parsing or the transport and are passed
/// through without being classified.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// More redirects were required than the configured maximum.
    #[error("Too many redirects: limit of {max} exceeded")]
    TooManyRedirects {
        /// The configured `max_redirects`
        max: usize,
    },

    /// A redirect pointed back at a URL already visited during this call.
    #[error("Cyclic redirect: {url} was already visited")]
    CyclicRedirect {
        /// The redirect target that closed the cycle
        url: Url,
    },

    /// A response declared chunked transfer encoding while detection was on.
    #[error("Unlimited content: {url} responded with chunked transfer encoding")]
    UnlimitedContent {
        /// URL of the response carrying the chunked encoding
        url: Url,
    },

    /// The URL passed to `resolve` could not be parsed.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The input as given by the caller
        url: String,
        /// Parse failure
        source: url::ParseError,
    },

    /// A redirect's `Location` header could not be turned into a URL.
    #[error("Invalid Location header {location:?}: {source}")]
    InvalidLocation {
        /// Raw header value
        location: String,
        /// Parse failure
        source: url::ParseError,
    },

    /// Transport error from the HTTP client (connect, timeout, protocol).
    #[error(transparent)]
    Http(#[from] ReqwestError),
}

/// The three classified failures of the redirect policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// See [`ResolveError::TooManyRedirects`]
    TooManyRedirects,
    /// See [`ResolveError::CyclicRedirect`]
    CyclicRedirect,
    /// See [`ResolveError::UnlimitedContent`]
    UnlimitedContent,
}

impl FailureKind {
    /// Returns a human-readable string representation of the failure kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::TooManyRedirects => "Too many redirects",
            FailureKind::CyclicRedirect => "Cyclic redirect",
            FailureKind::UnlimitedContent => "Unlimited content",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResolveError {
    /// Returns the classified failure kind, or `None` for URL and transport errors.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            ResolveError::TooManyRedirects { .. } => Some(FailureKind::TooManyRedirects),
            ResolveError::CyclicRedirect { .. } => Some(FailureKind::CyclicRedirect),
            ResolveError::UnlimitedContent { .. } => Some(FailureKind::UnlimitedContent),
            ResolveError::InvalidUrl { .. }
            | ResolveError::InvalidLocation { .. }
            | ResolveError::Http(_) => None,
        }
    }
}
