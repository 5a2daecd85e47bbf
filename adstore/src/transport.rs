use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::models::PlanQuery;

/// A way of asking the backend for plans. Returns the raw JSON payload; the
/// envelope is checked by [`crate::payload::parse_plans`].
#[async_trait(?Send)]
pub trait PlanTransport {
    async fn fetch_plans(&self, query: PlanQuery) -> Result<Value, TransportError>;
}

#[async_trait(?Send)]
impl<T: PlanTransport + ?Sized> PlanTransport for &T {
    async fn fetch_plans(&self, query: PlanQuery) -> Result<Value, TransportError> {
        (**self).fetch_plans(query).await
    }
}

#[async_trait(?Send)]
impl<T: PlanTransport + ?Sized> PlanTransport for Box<T> {
    async fn fetch_plans(&self, query: PlanQuery) -> Result<Value, TransportError> {
        (**self).fetch_plans(query).await
    }
}

/// Tries `primary` first and falls back to `fallback` on any primary failure.
///
/// Primary failures are never surfaced; only the fallback's error reaches the
/// caller.
pub struct FallbackTransport<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackTransport<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait(?Send)]
impl<P, F> PlanTransport for FallbackTransport<P, F>
where
    P: PlanTransport,
    F: PlanTransport,
{
    async fn fetch_plans(&self, query: PlanQuery) -> Result<Value, TransportError> {
        match self.primary.fetch_plans(query).await {
            Ok(payload) if !is_empty_payload(&payload) => return Ok(payload),
            Ok(_) => tracing::debug!("Primary transport returned no data, falling back"),
            Err(e) => tracing::debug!("Primary transport failed ({}), falling back", e),
        }

        self.fallback.fetch_plans(query).await
    }
}

// Mirrors a falsy response body: nothing usable came back.
fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    struct Fixed {
        result: Result<Value, TransportError>,
        calls: Cell<usize>,
    }

    impl Fixed {
        fn new(result: Result<Value, TransportError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl PlanTransport for Fixed {
        async fn fetch_plans(&self, _query: PlanQuery) -> Result<Value, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_primary_wins() {
        let primary = Fixed::new(Ok(json!({ "success": true, "data": [] })));
        let fallback = Fixed::new(Err(TransportError::Status(500)));
        let transport = FallbackTransport::new(&primary, &fallback);

        let payload = transport.fetch_plans(PlanQuery::active()).await.unwrap();
        assert_eq!(payload["success"], json!(true));
        assert_eq!(primary.calls.get(), 1);
        assert_eq!(fallback.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_primary_failure_is_swallowed() {
        let primary = Fixed::new(Err(TransportError::Unavailable));
        let fallback = Fixed::new(Ok(json!({ "success": true, "data": [] })));
        let transport = FallbackTransport::new(&primary, &fallback);

        assert!(transport.fetch_plans(PlanQuery::active()).await.is_ok());
        assert_eq!(fallback.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_empty_primary_payload_falls_back() {
        let primary = Fixed::new(Ok(Value::Null));
        let fallback = Fixed::new(Ok(json!({ "success": true, "data": [] })));
        let transport = FallbackTransport::new(&primary, &fallback);

        assert!(transport.fetch_plans(PlanQuery::active()).await.is_ok());
        assert_eq!(fallback.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_fallback_error_reaches_caller() {
        let primary = Fixed::new(Err(TransportError::Network("boom".into())));
        let fallback = Fixed::new(Err(TransportError::Status(500)));
        let transport = FallbackTransport::new(&primary, &fallback);

        assert_eq!(
            transport.fetch_plans(PlanQuery::active()).await,
            Err(TransportError::Status(500))
        );
    }
}
