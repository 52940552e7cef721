use crate::domain::request::{ApiError, Payload, Request};
use async_trait::async_trait;

/// Port for the raw HTTP verb primitives.
///
/// Implementations inject the Basic credential header, attach browser-managed
/// credentials for `Auth::Included` requests, and turn any non-2xx response into
/// `ApiError::Status` carrying the status, the application error code and the
/// response text.
#[async_trait(?Send)]
pub trait HttpPort: Send + Sync {
    async fn send(&self, request: &Request) -> Result<Payload, ApiError>;
}
