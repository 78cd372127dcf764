//! The resolver: entry point for a single URL.

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::config::ResolverConfig;
use crate::error_handling::{InitializationError, ResolveError};
use crate::fetch::{HttpClient, RedirectPolicy, ReqwestClient};
use crate::initialization::init_client;

/// Outcome of a successful resolve call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Terminal URL: the URL of the first non-redirect response
    pub final_url: Url,
    /// Status code of the terminal response
    pub status: u16,
    /// Start URL followed by every redirect target, ending with `final_url`
    pub chain: Vec<Url>,
}

impl Resolution {
    /// Number of redirects followed to reach `final_url`.
    pub fn redirect_count(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }
}

/// Resolves URLs to the target at the end of their redirect chain.
///
/// A resolver is immutable: every call to [`resolve`](Self::resolve) gets its own
/// [`RedirectPolicy`], so one instance can be shared (e.g. in an `Arc`) across
/// concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use redirect_resolver::{Resolver, ResolverConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = Resolver::new(ResolverConfig::default())?;
/// let target = resolver.resolve("https://example.com/short").await?;
/// println!("{}", target);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Resolver<C = ReqwestClient> {
    client: C,
    config: ResolverConfig,
}

impl Resolver<ReqwestClient> {
    /// Builds a resolver backed by a reqwest client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: ResolverConfig) -> Result<Self, InitializationError> {
        let client = ReqwestClient::new(init_client(&config)?);
        Ok(Self::with_client(client, config))
    }
}

impl<C: HttpClient> Resolver<C> {
    /// Builds a resolver on top of any [`HttpClient`].
    pub fn with_client(client: C, config: ResolverConfig) -> Self {
        Self { client, config }
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The configuration this resolver was built with.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Follows the redirect chain of `url` with HEAD requests and returns the
    /// terminal URL.
    ///
    /// # Errors
    ///
    /// - `ResolveError::TooManyRedirects` if the chain is longer than `max_redirects`
    /// - `ResolveError::CyclicRedirect` if the chain returns to a visited URL
    /// - `ResolveError::UnlimitedContent` if any response is chunked and
    ///   `ignore_unlimited` is false
    /// - `ResolveError::InvalidUrl`, `ResolveError::InvalidLocation` and
    ///   `ResolveError::Http` for unparseable URLs and transport failures
    pub async fn resolve(&self, url: &str) -> Result<Url, ResolveError> {
        self.resolve_with_chain(url)
            .await
            .map(|resolution| resolution.final_url)
    }

    /// Like [`resolve`](Self::resolve), but also returns the chain of hops and
    /// the terminal status code.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub async fn resolve_with_chain(&self, url: &str) -> Result<Resolution, ResolveError> {
        let start = Url::parse(url).map_err(|source| ResolveError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let mut policy = RedirectPolicy::new(
            start.clone(),
            self.config.max_redirects,
            self.config.detect_unbounded_content(),
        );
        let head = self
            .client
            .execute(Method::HEAD, start, &mut policy)
            .await?;

        let mut chain = policy.into_chain();
        // Normally the last admitted target; a client may report a different effective URL
        if chain.last() != Some(&head.url) {
            chain.push(head.url.clone());
        }
        log::debug!(
            "Resolved {} to {} after {} redirect(s)",
            url,
            head.url,
            chain.len() - 1
        );

        Ok(Resolution {
            final_url: head.url,
            status: head.status.as_u16(),
            chain,
        })
    }
}
