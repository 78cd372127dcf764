//! Configuration constants.
//!
//! This module defines the defaults used by the library and the CLI, along with
//! the set of HTTP status codes treated as redirects.

/// Maximum number of redirects followed by the library before failing.
pub const DEFAULT_MAX_REDIRECTS: usize = 3;

/// Maximum number of redirects followed by the CLI before failing.
pub const CLI_DEFAULT_MAX_REDIRECTS: usize = 5;

/// Per-request timeout in seconds for the bundled HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HEAD requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("redirect_resolver/", env!("CARGO_PKG_VERSION"));

/// HTTP status codes that are followed as redirects.
///
/// 300 (Multiple Choices) and 304 (Not Modified) do not name a single next
/// location and are returned as terminal responses.
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

/// Transfer-Encoding token marking a response body of undeclared length.
pub const CHUNKED_TOKEN: &str = "chunked";
