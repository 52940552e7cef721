use super::error::ApiError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

const JSON_CONTENT_TYPE: &str = "application/json";

/// The verb table of the request layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    PostNoBody,
    PostMultipart,
    Patch,
    Put,
}

impl Method {
    /// HTTP method name sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post | Method::PostNoBody | Method::PostMultipart => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::PostNoBody => "POST_NO_BODY",
            Method::PostMultipart => "POST_MULTIPART",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
        };
        f.write_str(name)
    }
}

/// Which credentials a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Basic header plus browser-managed credentials (cookies).
    Included,
    /// Basic header only.
    Public,
    /// No credentials at all.
    Anonymous,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartFile {
    pub field: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    Multipart(Vec<MultipartFile>),
}

/// Transient request descriptor, built per call and dropped once it resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Body,
    pub auth: Auth,
}

impl Request {
    fn new(method: Method, url: impl Into<String>, body: Body) -> Self {
        Self {
            method,
            url: url.into(),
            body,
            auth: Auth::Included,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url, Body::Empty)
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, url, Body::Json(body))
    }

    pub fn post_no_body(url: impl Into<String>) -> Self {
        Self::new(Method::PostNoBody, url, Body::Empty)
    }

    pub fn post_multipart(url: impl Into<String>, parts: Vec<MultipartFile>) -> Self {
        Self::new(Method::PostMultipart, url, Body::Multipart(parts))
    }

    pub fn patch(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Patch, url, Body::Json(body))
    }

    pub fn put(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, url, Body::Json(body))
    }

    pub fn public(mut self) -> Self {
        self.auth = Auth::Public;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.auth = Auth::Anonymous;
        self
    }

    /// Content type header for this request; multipart bodies let the transport
    /// pick the boundary, anonymous requests send no headers.
    pub fn content_type(&self) -> Option<&'static str> {
        match (&self.body, self.auth) {
            (_, Auth::Anonymous) => None,
            (Body::Multipart(_), _) => None,
            _ => Some(JSON_CONTENT_TYPE),
        }
    }

    pub fn sends_authorization(&self) -> bool {
        self.auth != Auth::Anonymous
    }
}

/// `Basic base64(username:password)`
pub fn basic_authorization(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// Successful response of a verb primitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payload {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Payload {
    pub fn new(status: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    pub fn from_json(status: u16, value: &Value) -> Self {
        Self::new(
            status,
            Some(JSON_CONTENT_TYPE.to_string()),
            value.to_string().into_bytes(),
        )
    }

    /// Parses the body as JSON. An empty body reads as `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if self.is_empty() {
            return serde_json::from_value(Value::Null).map_err(ApiError::from);
        }
        serde_json::from_slice(&self.body).map_err(ApiError::from)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.iter().all(|b| b.is_ascii_whitespace())
    }
}
