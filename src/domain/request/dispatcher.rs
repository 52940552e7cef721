use super::{ApiError, MultipartFile, Payload, Request};
use crate::platform::Platform;
use crate::ports::{ClockPort, HttpPort, LoggerPort, TokenRefreshPort};
use crate::time_it;
use serde_json::Value;
use std::sync::Arc;

/// Wraps the verb primitives so that an expired access token is recovered by
/// exactly one refresh followed by exactly one retry.
///
/// Calls are independent: nothing is shared between them, so two calls that
/// fail concurrently each run their own refresh.
pub struct RequestDispatcher {
    http: Arc<dyn HttpPort>,
    refresher: Arc<dyn TokenRefreshPort>,
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
}

impl RequestDispatcher {
    pub fn new(platform: &Platform, refresher: Arc<dyn TokenRefreshPort>) -> Self {
        Self {
            http: platform.http(),
            refresher,
            logger: platform.logger(),
            clock: platform.clock(),
        }
    }

    /// Attempt, and on token expiry refresh then retry once. The second outcome
    /// is returned as-is, whatever it is.
    pub async fn execute(&self, request: &Request) -> Result<Payload, ApiError> {
        match self.attempt(request).await {
            Err(error) if error.is_token_expired() => {
                self.logger.warn(&format!(
                    "Access token expired on {} {}, refreshing",
                    request.method, request.url
                ));

                self.refresher.refresh().await.map_err(|e| {
                    self.logger.error(&format!("Token refresh failed: {e}"));
                    e
                })?;

                self.attempt(request).await
            }
            outcome => outcome,
        }
    }

    /// Sends through the raw primitive, without the refresh policy.
    pub async fn send_direct(&self, request: &Request) -> Result<Payload, ApiError> {
        self.attempt(request).await
    }

    async fn attempt(&self, request: &Request) -> Result<Payload, ApiError> {
        let label = format!("{} {}", request.method, request.url);

        let outcome = time_it!(self.logger, self.clock, &label, {
            self.http.send(request).await
        });

        if let Err(error) = &outcome {
            self.logger.error(&format!("{label} failed: {error}"));
        }
        outcome
    }

    pub async fn get(&self, url: &str) -> Result<Payload, ApiError> {
        self.execute(&Request::get(url)).await
    }

    pub async fn post(&self, url: &str, body: Value) -> Result<Payload, ApiError> {
        self.execute(&Request::post(url, body)).await
    }

    pub async fn post_no_body(&self, url: &str) -> Result<Payload, ApiError> {
        self.execute(&Request::post_no_body(url)).await
    }

    pub async fn post_multipart(
        &self,
        url: &str,
        parts: Vec<MultipartFile>,
    ) -> Result<Payload, ApiError> {
        self.execute(&Request::post_multipart(url, parts)).await
    }

    pub async fn patch(&self, url: &str, body: Value) -> Result<Payload, ApiError> {
        self.execute(&Request::patch(url, body)).await
    }

    pub async fn put(&self, url: &str, body: Value) -> Result<Payload, ApiError> {
        self.execute(&Request::put(url, body)).await
    }
}
