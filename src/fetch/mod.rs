//! Redirect resolution over HEAD requests.
//!
//! This module is split into:
//! - The HTTP client capability ([`HttpClient`]) and its pre-redirect hook
//!   contract ([`RedirectHook`])
//! - The reqwest-backed client ([`ReqwestClient`])
//! - The redirect policy: per-call state, loop and length detection
//! - The [`Resolver`] tying them together
//!
//! The client owns the network round trips and the mechanics of following a
//! redirect. The policy, installed as the hook, decides whether each redirect
//! may be followed and with which method.

mod client;
mod redirects;
mod resolver;
mod response;


use futures::future::BoxFuture;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::config::REDIRECT_STATUS_CODES;
use crate::error_handling::ResolveError;

pub use client::ReqwestClient;
pub use redirects::{RedirectPolicy, RedirectState};
pub use resolver::{Resolution, Resolver};
pub use response::ResponseHead;

/// A redirect the client is about to follow.
#[derive(Debug, Clone, Copy)]
pub struct RedirectAttempt<'a> {
    /// The redirect response that was just received
    pub previous: &'a ResponseHead,
    /// Target of the redirect, already resolved against `previous.url`
    pub next: &'a Url,
    /// Method the client would use for the follow-up request on its own
    pub method: &'a Method,
}

/// Callbacks an [`HttpClient`] invokes while executing a request.
///
/// Either callback can abort the whole request by returning an error; the
/// client must return that error unchanged.
pub trait RedirectHook {
    /// Called for every response received, redirects included, before anything
    /// else is done with it.
    fn inspect_response(&mut self, response: &ResponseHead) -> Result<(), ResolveError>;

    /// Called before a redirect is followed. Returns the method to use for the
    /// follow-up request.
    fn before_redirect(&mut self, attempt: &RedirectAttempt<'_>) -> Result<Method, ResolveError>;
}

/// HTTP client capability consumed by the [`Resolver`].
///
/// Implementations issue `method` against `url` and follow redirects
/// themselves, consulting `hook` on every response and before every redirect.
/// The returned [`ResponseHead`] describes the first non-redirect response (or
/// a redirect that carried no `Location`), including its effective URL.
pub trait HttpClient: Send + Sync {
    /// Executes the request, following redirects as approved by `hook`.
    fn execute<'a>(
        &'a self,
        method: Method,
        url: Url,
        hook: &'a mut (dyn RedirectHook + Send),
    ) -> BoxFuture<'a, Result<ResponseHead, ResolveError>>;
}

/// Returns true if `status` is one of the followed redirect codes.
pub fn is_redirect_status(status: StatusCode) -> bool {
    REDIRECT_STATUS_CODES.contains(&status.as_u16())
}

/// Method a browser-like client uses after a redirect with `status`.
///
/// 301, 302 and 303 turn anything but GET and HEAD into GET; 307 and 308
/// keep the method.
pub fn default_redirect_method(status: StatusCode, method: &Method) -> Method {
    match status {
        StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND | StatusCode::SEE_OTHER => {
            if *method == Method::GET || *method == Method::HEAD {
                method.clone()
            } else {
                Method::GET
            }
        }
        _ => method.clone(),
    }
}
