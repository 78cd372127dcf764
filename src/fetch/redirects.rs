//! Redirect policy: length and loop detection.
//!
//! This module holds the per-call redirect state and the policy installed as the
//! [`RedirectHook`] of an [`HttpClient`](crate::fetch::HttpClient). The policy
//! admits a redirect only while the chain is short enough and has not returned
//! to a URL it already visited, always continues with HEAD, and optionally
//! rejects any response with chunked transfer encoding.

use std::collections::HashSet;

use reqwest::Method;
use url::Url;

use crate::error_handling::ResolveError;
use crate::fetch::{RedirectAttempt, RedirectHook, ResponseHead};

/// Mutable state of a single resolve call.
///
/// Created fresh for every call and dropped when the call returns. `visited`
/// never shrinks, and a URL is only inserted if it was not already present.
#[derive(Debug, Clone)]
pub struct RedirectState {
    redirect_count: usize,
    visited: HashSet<Url>,
    chain: Vec<Url>,
}

impl RedirectState {
    /// Starts a chain at `start`, which counts as visited.
    pub fn new(start: Url) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.clone());
        Self {
            redirect_count: 0,
            visited,
            chain: vec![start],
        }
    }

    /// Number of redirects considered so far, including a rejected one.
    pub fn redirect_count(&self) -> usize {
        self.redirect_count
    }

    /// Returns true if `url` was the start URL or an admitted redirect target.
    pub fn has_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    /// Start URL followed by every admitted redirect target, in order.
    pub fn chain(&self) -> &[Url] {
        &self.chain
    }

    /// Consumes the state, returning the chain.
    pub fn into_chain(self) -> Vec<Url> {
        self.chain
    }

    /// Records a redirect to `next` and checks it against the policy.
    ///
    /// The count check runs first: once the limit is exceeded the redirect is
    /// rejected as too many even if it would also close a cycle.
    ///
    /// # Errors
    ///
    /// - `ResolveError::TooManyRedirects` if this is redirect number
    ///   `max_redirects + 1`
    /// - `ResolveError::CyclicRedirect` if `next` was already visited
    pub fn admit(&mut self, next: &Url, max_redirects: usize) -> Result<(), ResolveError> {
        self.redirect_count += 1;
        if self.redirect_count > max_redirects {
            return Err(ResolveError::TooManyRedirects { max: max_redirects });
        }
        if !self.visited.insert(next.clone()) {
            return Err(ResolveError::CyclicRedirect { url: next.clone() });
        }
        self.chain.push(next.clone());
        Ok(())
    }
}

/// The redirect decision for one resolve call.
#[derive(Debug, Clone)]
pub struct RedirectPolicy {
    state: RedirectState,
    max_redirects: usize,
    detect_unbounded_content: bool,
}

impl RedirectPolicy {
    /// Creates the policy for a call starting at `start`.
    pub fn new(start: Url, max_redirects: usize, detect_unbounded_content: bool) -> Self {
        Self {
            state: RedirectState::new(start),
            max_redirects,
            detect_unbounded_content,
        }
    }

    /// Current redirect state.
    pub fn state(&self) -> &RedirectState {
        &self.state
    }

    /// Consumes the policy, returning the chain of admitted URLs.
    pub fn into_chain(self) -> Vec<Url> {
        self.state.into_chain()
    }
}

impl RedirectHook for RedirectPolicy {
    fn inspect_response(&mut self, response: &ResponseHead) -> Result<(), ResolveError> {
        if self.detect_unbounded_content && response.is_chunked() {
            return Err(ResolveError::UnlimitedContent {
                url: response.url.clone(),
            });
        }
        Ok(())
    }

    fn before_redirect(&mut self, attempt: &RedirectAttempt<'_>) -> Result<Method, ResolveError> {
        self.state.admit(attempt.next, self.max_redirects)?;
        log::debug!(
            "Following {} redirect #{}: {} -> {}",
            attempt.previous.status.as_u16(),
            self.state.redirect_count(),
            attempt.previous.url,
            attempt.next
        );
        // HEAD for every hop, whatever the client would pick for this status
        Ok(Method::HEAD)
    }
}
