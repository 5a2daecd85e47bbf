use adstore::{PlanQuery, PlanTransport, TransportError};
use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect, JSON};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::js_error;

/// The request function some host pages install as `window.api`.
///
/// It resolves to an object carrying `json` when `ok` is set and `data`
/// otherwise.
pub struct HostApiTransport;

impl HostApiTransport {
    fn function() -> Option<Function> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("api"))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    async fn call(api: &Function, path: &str) -> anyhow::Result<JsValue> {
        let result = api
            .call1(&JsValue::NULL, &JsValue::from_str(path))
            .map_err(js_error)?;
        JsFuture::from(Promise::resolve(&result))
            .await
            .map_err(js_error)
    }

    fn payload(response: &JsValue) -> anyhow::Result<Option<Value>> {
        if response.is_null() || response.is_undefined() {
            return Ok(None);
        }

        let ok = Reflect::get(response, &JsValue::from_str("ok"))
            .map_err(js_error)?
            .is_truthy();
        let field = if ok { "json" } else { "data" };
        let data = Reflect::get(response, &JsValue::from_str(field)).map_err(js_error)?;
        if data.is_null() || data.is_undefined() {
            return Ok(None);
        }

        let text = JSON::stringify(&data)
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| anyhow::anyhow!("`{}` is not serializable", field))?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}

#[async_trait(?Send)]
impl PlanTransport for HostApiTransport {
    async fn fetch_plans(&self, query: PlanQuery) -> Result<Value, TransportError> {
        let Some(api) = Self::function() else {
            return Err(TransportError::Unavailable);
        };

        let response = Self::call(&api, &query.path())
            .await
            .map_err(|e| TransportError::Network(format!("{:#}", e)))?;

        match Self::payload(&response) {
            Ok(Some(payload)) => Ok(payload),
            Ok(None) => Err(TransportError::NoData),
            Err(e) => Err(TransportError::Decode(format!("{:#}", e))),
        }
    }
}
