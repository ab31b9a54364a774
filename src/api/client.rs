use std::time::Duration;

/// PRB service client with connection pooling.
pub struct ApiClient {
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("prb-cli/1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self { http_client }
    }

    /// Shared HTTP client for making requests (cheap clone).
    pub fn http_client(&self) -> reqwest::Client {
        self.http_client.clone()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
