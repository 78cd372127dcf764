//! Response metadata seen by the redirect policy.

use reqwest::header::{HeaderMap, LOCATION, TRANSFER_ENCODING};
use reqwest::StatusCode;
use url::Url;

use crate::config::CHUNKED_TOKEN;
use crate::error_handling::ResolveError;
use crate::fetch::is_redirect_status;

/// Status line and headers of one hop. HEAD responses carry no body.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// Effective URL of the response
    pub url: Url,
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
}

impl ResponseHead {
    /// Creates a response head from its parts.
    pub fn new(url: Url, status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            url,
            status,
            headers,
        }
    }

    /// Returns true if the status is one of the followed redirect codes.
    pub fn is_redirect(&self) -> bool {
        is_redirect_status(self.status)
    }

    /// Returns true if any `Transfer-Encoding` header lists the `chunked` coding.
    ///
    /// Codings are compared case-insensitively, and a header may list several
    /// (`gzip, chunked`).
    pub fn is_chunked(&self) -> bool {
        self.headers
            .get_all(TRANSFER_ENCODING)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .any(|coding| coding.trim().eq_ignore_ascii_case(CHUNKED_TOKEN))
    }

    /// Resolves the `Location` header against this response's URL.
    ///
    /// Returns `Ok(None)` when the header is absent.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidLocation` if the header value cannot be
    /// parsed as an absolute or relative URL.
    pub fn location(&self) -> Result<Option<Url>, ResolveError> {
        let Some(raw) = self.headers.get(LOCATION) else {
            return Ok(None);
        };
        let raw = String::from_utf8_lossy(raw.as_bytes());
        self.url
            .join(raw.trim())
            .map(Some)
            .map_err(|source| ResolveError::InvalidLocation {
                location: raw.into_owned(),
                source,
            })
    }
}

impl From<&reqwest::Response> for ResponseHead {
    fn from(response: &reqwest::Response) -> Self {
        Self::new(
            response.url().clone(),
            response.status(),
            response.headers().clone(),
        )
    }
}
