use super::endpoints::REFRESH_ACCESS;
use super::{ApiError, Payload, Request};
use crate::ports::{HttpPort, TokenRefreshPort};
use async_trait::async_trait;
use std::sync::Arc;

/// Renews the access cookie by calling the refresh endpoint through the raw
/// (unwrapped) verb primitives.
pub struct AccessRefresher {
    http: Arc<dyn HttpPort>,
    url: String,
}

impl AccessRefresher {
    pub fn new(http: Arc<dyn HttpPort>, request_url: &str) -> Self {
        Self {
            http,
            url: format!("{request_url}{REFRESH_ACCESS}"),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl TokenRefreshPort for AccessRefresher {
    async fn refresh(&self) -> Result<Payload, ApiError> {
        self.http.send(&Request::post_no_body(self.url.as_str())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{Auth, Method};
    use futures::executor::block_on;
    use parking_lot::Mutex;

    struct RecordingHttp {
        requests: Mutex<Vec<Request>>,
    }

    #[async_trait(?Send)]
    impl HttpPort for RecordingHttp {
        async fn send(&self, request: &Request) -> Result<Payload, ApiError> {
            self.requests.lock().push(request.clone());
            Ok(Payload::default())
        }
    }

    #[test]
    fn test_refresh_posts_without_body_with_credentials() {
        let http = Arc::new(RecordingHttp {
            requests: Mutex::new(Vec::new()),
        });
        let refresher = AccessRefresher::new(http.clone(), "https://api.local/v1");

        block_on(refresher.refresh()).unwrap();

        let requests = http.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::PostNoBody);
        assert_eq!(requests[0].auth, Auth::Included);
        assert_eq!(requests[0].url, "https://api.local/v1/token/refresh/access");
        assert_eq!(refresher.url(), "https://api.local/v1/token/refresh/access");
    }
}
