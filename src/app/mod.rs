//! CLI support.
//!
//! Helpers used by the `redirect_resolver` binary before handing a URL to the
//! library, and for mapping outcomes to process exit codes.

pub mod url;

use crate::error_handling::{FailureKind, ResolveError};

// Re-export public API
pub use url::validate_and_normalize_url;

/// Exit code for a failed resolve call.
///
/// - `2`: too many redirects
/// - `3`: cyclic redirect
/// - `4`: unlimited content
/// - `1`: any other error (invalid URL, transport failure)
pub fn exit_code(error: &ResolveError) -> i32 {
    match error.kind() {
        Some(FailureKind::TooManyRedirects) => 2,
        Some(FailureKind::CyclicRedirect) => 3,
        Some(FailureKind::UnlimitedContent) => 4,
        None => 1,
    }
}
