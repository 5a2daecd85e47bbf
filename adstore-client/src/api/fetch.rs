use adstore::{PlanQuery, PlanTransport, StoreConfig, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

use super::js_error;

/// `fetch` against the storefront API with the session cookie attached.
pub struct FetchTransport {
    config: StoreConfig,
}

impl FetchTransport {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    async fn get(&self, path: &str) -> anyhow::Result<Response> {
        let url = self.config.url(path);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        opts.set_credentials(RequestCredentials::Include);

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("No window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        resp_value.dyn_into::<Response>().map_err(js_error)
    }

    async fn body_text(resp: &Response) -> anyhow::Result<String> {
        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        text.as_string()
            .ok_or_else(|| anyhow::anyhow!("Response body is not text"))
    }
}

#[async_trait(?Send)]
impl PlanTransport for FetchTransport {
    async fn fetch_plans(&self, query: PlanQuery) -> Result<Value, TransportError> {
        let resp = self
            .get(&query.path())
            .await
            .map_err(|e| TransportError::Network(format!("{:#}", e)))?;

        if !resp.ok() {
            return Err(TransportError::Status(resp.status()));
        }

        let body = Self::body_text(&resp)
            .await
            .map_err(|e| TransportError::Decode(format!("{:#}", e)))?;
        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}
