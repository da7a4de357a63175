use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde_json::Value;
use tokio::time;
use tracing::debug;

use super::authentication::Authentication;
use super::endpoint::Endpoint;
use crate::error::{Error, FetchError, Result};

/// Retry budget and deadlines for [`get_json`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Extra attempts after the first one.
    pub retry: u32,
    /// Deadline for a single attempt, body included.
    pub timeout: Duration,
    /// Unit of the linear backoff: the n-th retry waits `n * backoff`.
    pub backoff: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            retry: 2,
            timeout: Duration::from_millis(8000),
            backoff: Duration::from_millis(1000),
        }
    }
}

impl FetchOptions {
    pub fn attempts(&self) -> u32 {
        self.retry.saturating_add(1)
    }

    /// Delay before retry `retry_number`, counted from 1.
    pub fn backoff_delay(&self, retry_number: u32) -> Duration {
        self.backoff.saturating_mul(retry_number)
    }
}

/// GET a JSON document, retrying network errors, timeouts, non-2xx
/// statuses and unparsable bodies alike until the budget runs out.
pub async fn get_json<T: Endpoint + ?Sized>(
    client: &Client,
    endpoint: &T,
    options: &FetchOptions,
) -> Result<Value> {
    let url = endpoint.url();
    let attempts = options.attempts();
    let mut attempt = 0;

    loop {
        attempt += 1;
        debug!(attempt, %url, "fetching json");

        // Dropping the attempt future on timeout cancels the in-flight request.
        let err = match time::timeout(options.timeout, attempt_json(client, &url)).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(err)) => err,
            Err(_elapsed) => FetchError::Timeout(options.timeout),
        };

        if attempt >= attempts {
            return Err(Error::FetchExhausted {
                url,
                attempts,
                last: err,
            });
        }

        let delay = options.backoff_delay(attempt);
        debug!(attempt, error = %err, delay_ms = delay.as_millis() as u64, "json fetch failed, retrying");
        time::sleep(delay).await;
    }
}

async fn attempt_json(client: &Client, url: &str) -> Result<Value, FetchError> {
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let raw = response.text().await?;
    serde_json::from_str(&raw).map_err(FetchError::InvalidJson)
}

/// GET a page as text. No retries and no status check; the caller decides
/// what an unexpected page means.
pub async fn get_text<T: Endpoint + ?Sized, U: Authentication>(
    client: &Client,
    endpoint: &T,
    authentication: &U,
) -> reqwest::Result<String> {
    let url = endpoint.url();
    debug!(%url, "fetching page");
    let request_builder = authentication.apply(client.get(&url));
    request_builder.send().await?.text().await
}

/// POST a url-encoded form, or an empty body when `form` is empty.
pub async fn post<T: Endpoint + ?Sized, U: Authentication>(
    client: &Client,
    endpoint: &T,
    authentication: &U,
    form: &[(&str, &str)],
) -> reqwest::Result<Response> {
    let url = endpoint.url();
    debug!(%url, "posting");
    let mut request_builder = authentication.apply(client.post(&url));
    request_builder = if form.is_empty() {
        request_builder.body("")
    } else {
        request_builder.form(form)
    };
    request_builder.send().await
}
