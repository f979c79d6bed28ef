//! Retry policy for the sensor-data service: a single fixed retry with no
//! backoff, matching the dashboard's query-client behavior.

#[derive(Clone, Debug)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 1,
            delay_ms: 250,
        }
    }
}

/// HTTP statuses worth a second attempt.
pub fn is_retryable_http_error(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

/// Transport-level failures worth a second attempt.
pub fn is_retryable_network_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
