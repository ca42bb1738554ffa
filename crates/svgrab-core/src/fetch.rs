//! Fetching SVG text from a URL.
//!
//! The fetch path is the only retryable operation in the crate: requests
//! carry a timeout, and transient failures are retried with exponential
//! backoff. Validation failures and CORS-flagged failures are terminal.

use crate::error::ExtractError;
use crate::error::Result;
use crate::validation::validate_url;
use std::thread;
use std::time::Duration;

/// Default time budget for a single fetch attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Base delay of the exponential retry backoff.
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_millis(1000);

/// Options controlling URL fetches.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use svgrab_core::FetchOptions;
///
/// let options = FetchOptions::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_retries(3);
/// assert_eq!(options.retries, 3);
/// ```
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Per-attempt timeout. The in-flight request is aborted once it
    /// elapses and surfaces as a fetch error.
    ///
    /// Default: 30 seconds.
    pub timeout: Duration,

    /// Number of retries after the first attempt. Retryable failures are
    /// retried until this budget is exhausted, after which the last
    /// observed error propagates.
    ///
    /// Default: 0 (single attempt).
    pub retries: u32,

    /// Base delay for the backoff; the delay doubles on each retry.
    ///
    /// Default: 1000 ms.
    pub backoff_base: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retries: 0,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }
}

impl FetchOptions {
    /// Creates options with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry budget.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the backoff base delay.
    #[must_use]
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }
}

/// Fetches SVG text from `url`, retrying per `options`.
///
/// The URL is validated first; a non-http(s) or unparsable URL is a
/// validation error and is never retried. A non-2xx response, a body
/// lacking `<svg`, and transport failures (including timeouts) surface
/// as fetch errors; all of those except CORS-flagged ones are retried
/// until the budget is exhausted.
///
/// # Errors
///
/// Returns a validation error for a bad URL, or the last observed fetch
/// error once retries are exhausted.
pub fn fetch_svg(url: &str, options: &FetchOptions) -> Result<String> {
    if !validate_url(url) {
        return Err(ExtractError::validation_field(
            "Please enter a valid http(s) URL",
            "url",
        ));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(|err| ExtractError::Fetch {
            message: format!("failed to build HTTP client: {err}"),
            url: Some(url.to_string()),
            status: None,
        })?;

    let mut attempt = 0;
    loop {
        match fetch_once(&client, url) {
            Ok(text) => return Ok(text),
            Err(err) if err.is_retryable() && attempt < options.retries => {
                let delay = backoff_delay(options.backoff_base, attempt);
                log::warn!(
                    "fetch attempt {} of {} failed, retrying in {delay:?}: {err}",
                    attempt + 1,
                    options.retries + 1,
                );
                thread::sleep(delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Delay before the retry following failure number `attempt` (0-based).
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2_u32.saturating_pow(attempt))
}

fn fetch_once(client: &reqwest::blocking::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .map_err(|err| transport_error(&err, url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::Fetch {
            message: format!("Request failed with HTTP status {}", status.as_u16()),
            url: Some(url.to_string()),
            status: Some(status.as_u16()),
        });
    }

    let text = response.text().map_err(|err| transport_error(&err, url))?;
    if !text.contains("<svg") {
        return Err(ExtractError::Fetch {
            message: "URL did not return SVG content".to_string(),
            url: Some(url.to_string()),
            status: Some(status.as_u16()),
        });
    }

    Ok(text)
}

fn transport_error(err: &reqwest::Error, url: &str) -> ExtractError {
    let message = if err.is_timeout() {
        "Request timeout".to_string()
    } else {
        format!("fetch failed: {err}")
    };
    ExtractError::Fetch {
        message,
        url: Some(url.to_string()),
        status: err.status().map(|status| status.as_u16()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_a_validation_error() {
        let err = fetch_svg("not a url", &FetchOptions::default()).unwrap_err();
        assert!(matches!(err, ExtractError::Validation { .. }));
        assert_eq!(err.field(), Some("url"));
        assert!(!err.is_retryable());

        let err = fetch_svg("ftp://example.com/a.svg", &FetchOptions::default()).unwrap_err();
        assert!(matches!(err, ExtractError::Validation { .. }));
    }

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.retries, 0);
        assert_eq!(options.backoff_base, Duration::from_millis(1000));
    }

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let base = Duration::from_millis(1000);
        assert_eq!(backoff_delay(base, 0), Duration::from_millis(1000));
        assert_eq!(backoff_delay(base, 1), Duration::from_millis(2000));
        assert_eq!(backoff_delay(base, 2), Duration::from_millis(4000));
    }

    #[test]
    fn test_backoff_saturates() {
        let base = Duration::from_secs(u64::from(u32::MAX));
        let delay = backoff_delay(base, 40);
        assert!(delay >= base);
    }
}
