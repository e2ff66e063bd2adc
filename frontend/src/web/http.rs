//! Fetch transport
//!
//! Implements the core `HttpClient` seam on top of `web_sys::fetch`.

use hrdesk::request::{FormPart, RequestBody};
use hrdesk::{HttpClient, HttpError, HttpRequest, HttpResponse};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

/// Browser HTTP client
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    pub fn new() -> Self {
        Self
    }
}

fn build_error(context: &str, e: JsValue) -> HttpError {
    HttpError::RequestBuildFailed(format!("{context}: {e:?}"))
}

/// Raw bytes as a JS `Blob`.
pub fn bytes_to_blob(bytes: &[u8], content_type: Option<&str>) -> Result<Blob, JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let opts = BlobPropertyBag::new();
    if let Some(mime) = content_type {
        opts.set_type(mime);
    }
    Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
}

fn form_data(parts: Vec<FormPart>) -> Result<FormData, HttpError> {
    let form = FormData::new().map_err(|e| build_error("FormData", e))?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form
                .append_with_str(&name, &value)
                .map_err(|e| build_error("form field", e))?,
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let blob = bytes_to_blob(&bytes, content_type.as_deref())
                    .map_err(|e| build_error("Blob", e))?;
                form.append_with_blob_and_filename(&name, &blob, &file_name)
                    .map_err(|e| build_error("form file", e))?
            }
        }
    }
    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let headers = Headers::new().map_err(|e| build_error("Headers", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| build_error("header", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        match req.body {
            RequestBody::Empty => {}
            RequestBody::Json(body) => opts.set_body(&JsValue::from_str(&body)),
            // The browser writes the multipart boundary header itself.
            RequestBody::Multipart(parts) => opts.set_body(&form_data(parts)?.into()),
        }

        let request = Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| build_error("Request", e))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::NetworkError(format!("{e:?}")))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ResponseParseFailed(format!("not a Response: {e:?}")))?;

        let buffer = response
            .array_buffer()
            .map_err(|e| HttpError::ResponseParseFailed(format!("{e:?}")))?;
        let buffer = JsFuture::from(buffer)
            .await
            .map_err(|e| HttpError::ResponseParseFailed(format!("{e:?}")))?;

        Ok(HttpResponse::new(
            response.status(),
            Uint8Array::new(&buffer).to_vec(),
        ))
    }
}
