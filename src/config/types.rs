//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and resolver configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CLI_DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Resolver configuration (no CLI dependencies).
///
/// Immutable once a [`Resolver`](crate::Resolver) is built from it, so one
/// resolver can serve any number of independent (and concurrent) resolve calls.
///
/// # Examples
///
/// ```
/// use redirect_resolver::ResolverConfig;
///
/// let config = ResolverConfig {
///     max_redirects: 10,
///     ignore_unlimited: true,
///     ..Default::default()
/// };
/// assert_eq!(config.timeout_seconds, 10);
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Upper bound on redirects followed before failing with `TooManyRedirects`
    pub max_redirects: usize,

    /// Skip the chunked transfer-encoding check on every response
    pub ignore_unlimited: bool,

    /// Per-request timeout in seconds for the bundled HTTP client
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Ignore proxy settings from the environment
    pub no_proxy: bool,
}

impl ResolverConfig {
    /// Whether responses are checked for unbounded (chunked) content.
    pub fn detect_unbounded_content(&self) -> bool {
        !self.ignore_unlimited
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
            ignore_unlimited: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            no_proxy: false,
        }
    }
}

/// Command-line options for the `redirect_resolver` binary.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// redirect_resolver https://bit.ly/example
///
/// # Allow longer chains and accept chunked responses
/// redirect_resolver https://bit.ly/example --max-redirects 10 --ignore-unlimited-content
///
/// # Show every hop
/// redirect_resolver https://bit.ly/example --show-chain
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "redirect_resolver",
    about = "Finds the target URL at the end of a chain of redirects."
)]
pub struct Opt {
    /// URL for resolving
    pub url: String,

    /// Maximum number of redirects
    #[arg(long, default_value_t = CLI_DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Don't fail if the content may have unlimited size (chunked transfer encoding)
    #[arg(long)]
    pub ignore_unlimited_content: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Ignore HTTP(S)_PROXY environment settings
    #[arg(long)]
    pub no_proxy: bool,

    /// Print every hop of the redirect chain, one per line
    #[arg(long, conflicts_with = "json")]
    pub show_chain: bool,

    /// Print the resolution (final URL, status, chain) as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for ResolverConfig {
    fn from(opt: &Opt) -> Self {
        Self {
            max_redirects: opt.max_redirects,
            ignore_unlimited: opt.ignore_unlimited_content,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
            no_proxy: opt.no_proxy,
        }
    }
}
