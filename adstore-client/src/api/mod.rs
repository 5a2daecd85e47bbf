mod fetch;
mod host;

pub use fetch::FetchTransport;
pub use host::HostApiTransport;

use adstore::{FallbackTransport, StoreConfig};

/// The host page's `window.api` first, then a credentialed `fetch`.
pub fn plan_transport(config: StoreConfig) -> FallbackTransport<HostApiTransport, FetchTransport> {
    FallbackTransport::new(HostApiTransport, FetchTransport::new(config))
}

fn js_error(value: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", value)
}
