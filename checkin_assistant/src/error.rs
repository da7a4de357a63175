//! Error types for a check-in run.
//!
//! `FetchError` describes why a single attempt of the resilient JSON fetch
//! failed. Callers never see it on its own: once the retry budget is spent
//! the last one is wrapped in `Error::FetchExhausted`.
use std::time::Duration;

use thiserror::Error;

/// Why one attempt of a JSON fetch failed. Every variant is retryable.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, TLS or body transfer failure.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// No complete response within the per-attempt deadline.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The server answered outside the 2xx range.
    #[error("HTTP {0}")]
    Status(u16),

    /// The body arrived but was not JSON.
    #[error("catch error when parsing json")]
    InvalidJson(#[source] serde_json::Error),
}

/// Everything that can end a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing COOKIE param.")]
    MissingCookie,

    #[error("cannot get csrf from homepage.")]
    CsrfNotFound,

    /// A site action answered with a non-success status. Never retried.
    #[error("Failed to {action}: {status}")]
    Action { action: &'static str, status: u16 },

    /// The resilient fetcher used up its retry budget.
    #[error("{url}: gave up after {attempts} attempts: {last}")]
    FetchExhausted {
        url: String,
        attempts: u32,
        #[source]
        last: FetchError,
    },

    /// A provider response lacked a nested object it cannot do without.
    #[error("quote response is missing `{0}`")]
    MissingField(&'static str),

    #[error("unexpected quote response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Crate-wide `Result` with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;
