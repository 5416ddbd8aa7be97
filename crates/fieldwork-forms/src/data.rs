//! The remote data-load collaborator.

use serde_json::{Map, Value};
use tracing::warn;

use crate::transport::Transport;

/// Where a sequence of records comes from: already materialized, or an
/// endpoint to fetch.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Records supplied directly by the caller.
    Inline(Vec<Value>),
    /// Endpoint expected to respond with a JSON array of records.
    Endpoint(String),
}

/// Yields the records behind a source. Failures never escape this
/// boundary: a fetch error or a non-array response logs a diagnostic
/// and yields an empty sequence.
pub async fn load_records(source: &DataSource, transport: &dyn Transport) -> Vec<Value> {
    match source {
        DataSource::Inline(records) => records.clone(),
        DataSource::Endpoint(url) => match transport.send(url, "GET", &Map::new()).await {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                warn!(%url, "expected an array of records");
                Vec::new()
            }
            Err(err) => {
                warn!(%url, error = %err, "failed to load records");
                Vec::new()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::{FormsError, Result};
    use crate::transport::BoxFuture;

    struct CannedTransport(Result<Value>);

    impl Transport for CannedTransport {
        fn send<'a>(
            &'a self,
            _url: &'a str,
            _method: &'a str,
            _payload: &'a Map<String, Value>,
        ) -> BoxFuture<'a, Result<Value>> {
            Box::pin(async move {
                match &self.0 {
                    Ok(value) => Ok(value.clone()),
                    Err(FormsError::Transport { message }) => Err(FormsError::Transport {
                        message: message.clone(),
                    }),
                    Err(_) => unreachable!("canned transport only fails with transport errors"),
                }
            })
        }
    }

    #[tokio::test]
    async fn test_inline_records() {
        let transport = CannedTransport(Ok(Value::Null));
        let source = DataSource::Inline(vec![json!({"id": 1})]);
        assert_eq!(load_records(&source, &transport).await.len(), 1);
    }

    #[tokio::test]
    async fn test_endpoint_records() {
        let transport = CannedTransport(Ok(json!([{"id": 1}, {"id": 2}])));
        let source = DataSource::Endpoint("/api/records".into());
        assert_eq!(load_records(&source, &transport).await.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_yields_empty() {
        let transport = CannedTransport(Err(FormsError::Transport {
            message: "boom".into(),
        }));
        let source = DataSource::Endpoint("/api/records".into());
        assert!(load_records(&source, &transport).await.is_empty());
    }

    #[tokio::test]
    async fn test_non_array_yields_empty() {
        let transport = CannedTransport(Ok(json!({"not": "an array"})));
        let source = DataSource::Endpoint("/api/records".into());
        assert!(load_records(&source, &transport).await.is_empty());
    }
}
