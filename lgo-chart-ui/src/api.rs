//! Browser `fetch` client for the outcomes backend.
//!
//! Status and body decoding is delegated to `lgo_core::response`, so this
//! module only deals with turning JS promises into Rust futures.

use lgo_core::error::{FetchError, Result};
use lgo_core::query::Endpoint;
use lgo_core::response::decode_response;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(context: &str, err: JsValue) -> FetchError {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err));
    FetchError::Transport(format!("{}: {}", context, detail))
}

/// GET `url` and decode the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Transport("no window object".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error("fetch", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;

    let text_promise = resp.text().map_err(|e| js_error("read body", e))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| js_error("read body", e))?
        .as_string()
        .unwrap_or_default();

    decode_response(resp.status(), &body)
}

/// Fetch an [`Endpoint`] relative to `base_url`.
pub async fn fetch_endpoint<T: DeserializeOwned>(base_url: &str, endpoint: &Endpoint) -> Result<T> {
    let url = endpoint.url(base_url);
    log::info!("[LGO] GET {}", url);
    let result = fetch_json(&url).await;
    if let Err(e) = &result {
        log::error!("[LGO] {} failed: {}", endpoint.path(), e);
    }
    result
}
