//! HTTP client for upstream episode/metadata services
//!
//! Every upstream gets its own client so rate limits and names stay separate.
//! There is no retry logic here: provider failures are handled by the fallback
//! chain in the aggregation service.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response, StatusCode};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = concat!("miru-episodes/", env!("CARGO_PKG_VERSION"));
const BODY_EXCERPT_LEN: usize = 200;

/// Rate-limited JSON client for one upstream service
pub struct UpstreamClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    provider_name: String,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client for `base_url`
    ///
    /// `timeout` bounds every request made through this client; `None` leaves
    /// requests unbounded unless a per-call timeout is given.
    pub fn new(
        provider_name: &str,
        base_url: &str,
        requests_per_second: f64,
        timeout: Option<Duration>,
    ) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            AppError::InternalError(format!(
                "Failed to build HTTP client for {}: {}",
                provider_name, e
            ))
        })?;

        Ok(Self {
            client,
            rate_limiter: Self::create_rate_limiter(requests_per_second),
            provider_name: provider_name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Rate limiter allowing `requests_per_second` on average with a small burst
    fn create_rate_limiter(requests_per_second: f64) -> DirectRateLimiter {
        let requests_per_second = if requests_per_second.is_finite() && requests_per_second > 0.0
        {
            requests_per_second
        } else {
            1.0
        };

        let period = Duration::from_secs_f64(1.0 / requests_per_second);
        let burst = NonZeroU32::new((requests_per_second.ceil() as u32).max(1))
            .unwrap_or(NonZeroU32::MIN);

        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    /// Absolute URL for a path below the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON body
    pub async fn get<T>(&self, path: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request(path, None).await
    }

    /// GET `path` with a timeout for this call only
    pub async fn get_with_timeout<T>(&self, path: &str, timeout: Duration) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request(path, Some(timeout)).await
    }

    /// A per-call timeout also covers the wait for a rate-limit slot
    async fn request<T>(&self, path: &str, timeout: Option<Duration>) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let Some(timeout) = timeout else {
            return self.send_request(path).await;
        };

        tokio::time::timeout(timeout, self.send_request(path))
            .await
            .unwrap_or_else(|_| {
                tracing::warn!(
                    "{} request to {} timed out after {:?}",
                    self.provider_name,
                    path,
                    timeout
                );
                Err(AppError::ExternalServiceError("Request timeout".to_string()))
            })
    }

    async fn send_request<T>(&self, path: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        self.rate_limiter.until_ready().await;

        LogContext::api_call(&self.provider_name, path, "started", None);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("{} request to {} failed: {}", self.provider_name, url, e);
                AppError::from(e)
            })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            path,
            status.as_str(),
            Some(start.elapsed().as_millis() as u64),
        );

        if !status.is_success() {
            return Err(self.status_error(status));
        }

        self.parse_response(response).await
    }

    fn status_error(&self, status: StatusCode) -> AppError {
        match status {
            StatusCode::NOT_FOUND => {
                AppError::NotFound(format!("{} returned 404", self.provider_name))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::RateLimitError(format!("{} rate limit exceeded", self.provider_name))
            }
            _ => AppError::ApiError(format!(
                "{} API returned error: {}",
                self.provider_name, status
            )),
        }
    }

    /// Decode a JSON body, keeping a short excerpt of it in the error
    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::debug!("{} returned undecodable body", self.provider_name);
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                excerpt(&response_text)
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() > BODY_EXCERPT_LEN {
        let cut: String = body.chars().take(BODY_EXCERPT_LEN).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
