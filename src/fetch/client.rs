//! reqwest-backed HTTP client.
//!
//! This module follows redirect chains manually so every hop passes through the
//! installed [`RedirectHook`] before the next request is sent.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use reqwest::Method;
use url::Url;

use crate::error_handling::ResolveError;
use crate::fetch::{
    default_redirect_method, HttpClient, RedirectAttempt, RedirectHook, ResponseHead,
};

/// [`HttpClient`] on top of a `reqwest::Client`.
///
/// The wrapped client must have automatic redirects disabled (see
/// [`init_client`](crate::initialization::init_client)); otherwise reqwest
/// follows them itself and the hook never sees them.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestClient {
    /// Wraps a shared `reqwest::Client`.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    async fn follow(
        &self,
        mut method: Method,
        mut current: Url,
        hook: &mut (dyn RedirectHook + Send),
    ) -> Result<ResponseHead, ResolveError> {
        loop {
            let response = self
                .client
                .request(method.clone(), current.clone())
                .send()
                .await?;
            let head = ResponseHead::from(&response);
            drop(response);

            hook.inspect_response(&head)?;

            if !head.is_redirect() {
                return Ok(head);
            }

            let Some(next) = head.location()? else {
                log::warn!(
                    "Redirect status {} for {} but no Location header",
                    head.status.as_u16(),
                    head.url
                );
                return Ok(head);
            };

            let proposed = default_redirect_method(head.status, &method);
            method = hook.before_redirect(&RedirectAttempt {
                previous: &head,
                next: &next,
                method: &proposed,
            })?;
            current = next;
        }
    }
}

impl HttpClient for ReqwestClient {
    fn execute<'a>(
        &'a self,
        method: Method,
        url: Url,
        hook: &'a mut (dyn RedirectHook + Send),
    ) -> BoxFuture<'a, Result<ResponseHead, ResolveError>> {
        self.follow(method, url, hook).boxed()
    }
}
