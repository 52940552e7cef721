use crate::config::PortalConfig;
use crate::domain::request::{basic_authorization, ApiError, Auth, Body, Payload, Request};
use crate::global::get_global_scope;
use crate::ports::HttpPort;
use async_trait::async_trait;
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, FormData, Headers, RequestCredentials, RequestInit, Response,
    WorkerGlobalScope,
};

/// Browser verb primitives over `fetch`.
#[derive(Debug, Clone)]
pub struct FetchHttp {
    authorization: String,
}

impl FetchHttp {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            authorization: basic_authorization(&config.username, &config.password),
        }
    }

    fn headers(&self, request: &Request) -> Result<Headers, ApiError> {
        let headers = Headers::new()?;
        if request.sends_authorization() {
            headers.set("Authorization", &self.authorization)?;
        }
        if let Some(content_type) = request.content_type() {
            headers.set("Content-Type", content_type)?;
        }
        Ok(headers)
    }

    fn body(request: &Request) -> Result<Option<JsValue>, ApiError> {
        match &request.body {
            Body::Empty => Ok(None),
            Body::Json(value) => Ok(Some(JsValue::from_str(&value.to_string()))),
            Body::Multipart(parts) => {
                let form = FormData::new()?;
                for file in parts {
                    let chunks = Array::of1(&Uint8Array::from(file.bytes.as_slice()));
                    let options = BlobPropertyBag::new();
                    options.set_type(&file.mime_type);
                    let blob = Blob::new_with_u8_array_sequence_and_options(&chunks, &options)?;
                    form.append_with_blob_and_filename(&file.field, &blob, &file.file_name)?;
                }
                Ok(Some(form.into()))
            }
        }
    }

    fn fetch(request: &web_sys::Request) -> Result<Promise, ApiError> {
        let scope = get_global_scope().map_err(|e| ApiError::network(e.to_string()))?;
        if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
            Ok(worker.fetch_with_request(request))
        } else if let Ok(window) = scope.dyn_into::<web_sys::Window>() {
            Ok(window.fetch_with_request(request))
        } else {
            Err(ApiError::network("fetch is not available"))
        }
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchHttp {
    async fn send(&self, request: &Request) -> Result<Payload, ApiError> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_headers(&self.headers(request)?);
        if request.auth == Auth::Included {
            init.set_credentials(RequestCredentials::Include);
        }
        if let Some(body) = Self::body(request)? {
            init.set_body(&body);
        }

        let js_request = web_sys::Request::new_with_str_and_init(&request.url, &init)?;
        let response: Response = JsFuture::from(Self::fetch(&js_request)?)
            .await?
            .dyn_into()?;

        let status = response.status();
        let content_type = response.headers().get("Content-Type")?;
        let buffer = JsFuture::from(response.array_buffer()?).await?;
        let body = Uint8Array::new(&buffer).to_vec();

        if !response.ok() {
            return Err(ApiError::from_response(
                status,
                &String::from_utf8_lossy(&body),
            ));
        }
        Ok(Payload::new(status, content_type, body))
    }
}
