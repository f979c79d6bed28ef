//! Runtime configuration, read once from the environment at startup.

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the sensor-data service.
    pub api_base_url: String,
    /// Poll interval for the live loop, seconds.
    pub poll_secs: u64,
    /// Default dashboard window length, days.
    pub window_days: u32,
    /// Optional RNG seed for reproducible synthetic series.
    pub seed: Option<u64>,
    /// Request timeout for the sensor-data service, milliseconds.
    pub request_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // VITE_API_BASE_URL is honored for parity with the original
            // dashboard deployment.
            api_base_url: std::env::var("API_BASE_URL")
                .or_else(|_| std::env::var("VITE_API_BASE_URL"))
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            poll_secs: std::env::var("POLL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            window_days: std::env::var("WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            seed: std::env::var("SERIES_SEED").ok().and_then(|v| v.parse().ok()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            poll_secs: 15,
            window_days: 7,
            seed: None,
            request_timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.api_base_url, "http://localhost:8000");
        assert!((10..=30).contains(&cfg.poll_secs));
        assert_eq!(cfg.window_days, 7);
        assert!(cfg.seed.is_none());
    }
}
