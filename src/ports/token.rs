use crate::domain::request::{ApiError, Payload};
use async_trait::async_trait;

/// Port for renewing the access credential.
///
/// On success, later `Auth::Included` requests carry the renewed credential;
/// the renewal itself is a side effect on the cookie jar, not part of the payload.
#[async_trait(?Send)]
pub trait TokenRefreshPort: Send + Sync {
    async fn refresh(&self) -> Result<Payload, ApiError>;
}
