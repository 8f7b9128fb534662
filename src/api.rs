//! Recommendation API
//!
//! The single network boundary: one POST to the backend per submit.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{RecommendRequest, RecommendationItem};

/// POST the filter selection and decode the recommendation list.
///
/// Every failure mode (network unreachable, non-2xx status, undecodable
/// body) comes back as `Err` carrying the underlying detail; callers show
/// a fixed message and keep the detail for console diagnostics only.
pub async fn fetch_recommendations(
    endpoint: &str,
    request: &RecommendRequest,
) -> Result<Vec<RecommendationItem>, String> {
    let body = serde_json::to_string(request).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let req = Request::new_with_str_and_init(endpoint, &opts).map_err(js_detail)?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(js_detail)?;

    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;
    let fetch: js_sys::Promise = window.fetch_with_request(&req);
    let resp: Response = JsFuture::from(fetch)
        .await
        .map_err(js_detail)?
        .dyn_into()
        .map_err(js_detail)?;

    if !resp.ok() {
        return Err(format!("backend returned status {}", resp.status()));
    }

    let body: js_sys::Promise = resp.json().map_err(js_detail)?;
    let json = JsFuture::from(body).await.map_err(js_detail)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
