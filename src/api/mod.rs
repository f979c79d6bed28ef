//! Typed client for the external sensor-data service.
//!
//! The service owns raw sensor readings and server-side processing jobs;
//! this client is a thin wrapper with one fixed retry and no backoff.
//! Failures surface as `anyhow` errors with the endpoint in context.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::time::{sleep, Duration};
use url::Url;

pub mod retry;
pub mod types;

use crate::config::Config;
use crate::logging::{log, obj, v_num, v_str, Domain, Level};
use retry::{is_retryable_http_error, is_retryable_network_error, RetryConfig};
use types::{
    Health, ProcessedDataResponse, ProcessingJobResponse, ProcessingRequest, ProcessorsResponse,
    RawDataQuery, RawDataResponse, ResultsQuery,
};

/// Client seam so the poll loop can run against a stub in tests.
#[async_trait]
pub trait SensorApi {
    async fn health(&self) -> Result<Health>;
    async fn raw_data(&self, query: &RawDataQuery) -> Result<RawDataResponse>;
    async fn device_data(&self, device_id: &str, query: &RawDataQuery) -> Result<RawDataResponse>;
    async fn run_processing(&self, request: &ProcessingRequest) -> Result<ProcessingJobResponse>;
    async fn processors(&self) -> Result<ProcessorsResponse>;
    async fn processing_results(&self, query: &ResultsQuery) -> Result<ProcessedDataResponse>;
}

pub struct ApiClient {
    client: Client,
    base: Url,
    retry: RetryConfig,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let base = Url::parse(&cfg.api_base_url)
            .with_context(|| format!("invalid API base URL: {}", cfg.api_base_url))?;
        let client = Client::builder()
            .timeout(Duration::from_millis(cfg.request_timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base,
            retry: RetryConfig::default(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("invalid endpoint path: {path}"))
    }

    /// Send a request, retrying once on retryable failures.
    async fn execute<T, B>(&self, endpoint: &str, build: B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Fn() -> RequestBuilder,
    {
        let mut attempt = 0u32;
        loop {
            let outcome: std::result::Result<T, (bool, anyhow::Error)> = match build().send().await
            {
                Err(e) => Err((is_retryable_network_error(&e), anyhow::Error::new(e))),
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        resp.json::<T>()
                            .await
                            .map_err(|e| (false, anyhow::Error::new(e)))
                    } else {
                        let body = resp.text().await.unwrap_or_default();
                        Err((
                            is_retryable_http_error(status.as_u16()),
                            anyhow!("status {status}: {body}"),
                        ))
                    }
                }
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err((retryable, err)) => {
                    if retryable && attempt < self.retry.max_retries {
                        attempt += 1;
                        log(
                            Level::Debug,
                            Domain::Api,
                            "retrying",
                            obj(&[
                                ("endpoint", v_str(endpoint)),
                                ("attempt", v_num(attempt as f64)),
                                ("error", v_str(&err.to_string())),
                            ]),
                        );
                        sleep(Duration::from_millis(self.retry.delay_ms)).await;
                        continue;
                    }
                    return Err(err.context(format!("request to {endpoint} failed")));
                }
            }
        }
    }
}

#[async_trait]
impl SensorApi for ApiClient {
    async fn health(&self) -> Result<Health> {
        let url = self.endpoint("/api/v1/health")?;
        self.execute("/api/v1/health", || self.client.get(url.clone()))
            .await
    }

    async fn raw_data(&self, query: &RawDataQuery) -> Result<RawDataResponse> {
        let url = self.endpoint("/api/v1/data/raw")?;
        self.execute("/api/v1/data/raw", || {
            self.client.get(url.clone()).query(query)
        })
        .await
    }

    async fn device_data(&self, device_id: &str, query: &RawDataQuery) -> Result<RawDataResponse> {
        let path = format!("/api/v1/data/raw/{device_id}");
        let url = self.endpoint(&path)?;
        self.execute(&path, || self.client.get(url.clone()).query(query))
            .await
    }

    async fn run_processing(&self, request: &ProcessingRequest) -> Result<ProcessingJobResponse> {
        let url = self.endpoint("/api/v1/processing/run")?;
        self.execute("/api/v1/processing/run", || {
            self.client.post(url.clone()).json(request)
        })
        .await
    }

    async fn processors(&self) -> Result<ProcessorsResponse> {
        let url = self.endpoint("/api/v1/processing/processors")?;
        self.execute("/api/v1/processing/processors", || {
            self.client.get(url.clone())
        })
        .await
    }

    async fn processing_results(&self, query: &ResultsQuery) -> Result<ProcessedDataResponse> {
        let url = self.endpoint("/api/v1/processing/results")?;
        self.execute("/api/v1/processing/results", || {
            self.client.get(url.clone()).query(query)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_against_base() {
        let cfg = Config::default();
        let client = ApiClient::new(&cfg).unwrap();
        assert_eq!(
            client.endpoint("/api/v1/health").unwrap().as_str(),
            "http://localhost:8000/api/v1/health"
        );
        assert_eq!(
            client.endpoint("/api/v1/data/raw/well-3").unwrap().as_str(),
            "http://localhost:8000/api/v1/data/raw/well-3"
        );
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let cfg = Config {
            api_base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(ApiClient::new(&cfg).is_err());
    }
}
