use crate::config::PortalConfig;
use crate::domain::request::{basic_authorization, ApiError, Auth, Body, Method, Payload, Request};
use crate::ports::HttpPort;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};

/// Native verb primitives over `reqwest`.
///
/// `Auth::Included` requests go through a client with a cookie store, which
/// plays the part of the browser's credential jar; the access refresh updates
/// it in place.
pub struct ReqwestHttp {
    included: reqwest::Client,
    public: reqwest::Client,
    authorization: String,
}

impl ReqwestHttp {
    pub fn new(config: &PortalConfig) -> Result<Self, ApiError> {
        let included = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        let public = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok(Self {
            included,
            public,
            authorization: basic_authorization(&config.username, &config.password),
        })
    }

    fn client(&self, auth: Auth) -> &reqwest::Client {
        match auth {
            Auth::Included => &self.included,
            Auth::Public | Auth::Anonymous => &self.public,
        }
    }

    fn build(&self, request: &Request) -> Result<reqwest::RequestBuilder, ApiError> {
        let client = self.client(request.auth);
        let mut builder = match request.method {
            Method::Get => client.get(&request.url),
            Method::Post | Method::PostNoBody | Method::PostMultipart => client.post(&request.url),
            Method::Patch => client.patch(&request.url),
            Method::Put => client.put(&request.url),
        };

        if request.sends_authorization() {
            builder = builder.header(AUTHORIZATION, &self.authorization);
        }
        if let Some(content_type) = request.content_type() {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        Ok(match &request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.body(value.to_string()),
            Body::Multipart(parts) => {
                let mut form = Form::new();
                for file in parts {
                    let part = Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone())
                        .mime_str(&file.mime_type)
                        .map_err(|e| ApiError::serialization(e.to_string()))?;
                    form = form.part(file.field.clone(), part);
                }
                builder.multipart(form)
            }
        })
    }
}

#[async_trait(?Send)]
impl HttpPort for ReqwestHttp {
    async fn send(&self, request: &Request) -> Result<Payload, ApiError> {
        let response = self
            .build(request)?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?
            .to_vec();

        if !status.is_success() {
            return Err(ApiError::from_response(
                status.as_u16(),
                &String::from_utf8_lossy(&body),
            ));
        }
        Ok(Payload::new(status.as_u16(), content_type, body))
    }
}
