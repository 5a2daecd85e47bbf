use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::TransportError;
use crate::models::PlanQuery;
use crate::transport::PlanTransport;

/// Plan transport over plain HTTP for native callers.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: StoreConfig,
}

impl HttpTransport {
    pub fn new(client: Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl PlanTransport for HttpTransport {
    async fn fetch_plans(&self, query: PlanQuery) -> Result<Value, TransportError> {
        let url = self.config.url(&query.path());
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
