//! Per-call timeout guard for adapter futures.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DOCUMENT_ADAPTER, GRAPH_ADAPTER};
use crate::errors::{AdapterError, CareerResult};

/// The two adapter classes whose failures decide OK vs DEGRADED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterClass {
    Graph,
    Documents,
}

impl AdapterClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Graph => GRAPH_ADAPTER,
            Self::Documents => DOCUMENT_ADAPTER,
        }
    }
}

/// Run an adapter call under a timeout. Elapsing becomes `AdapterError::Timeout`.
///
/// Dropping the returned future drops the inner call.
pub async fn guarded<T, F>(
    class: AdapterClass,
    operation: &str,
    timeout: Duration,
    call: F,
) -> CareerResult<T>
where
    F: Future<Output = CareerResult<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(AdapterError::Timeout {
            adapter: class.as_str().to_string(),
            operation: operation.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CareerError;

    #[tokio::test]
    async fn completes_within_timeout() {
        let value = guarded(AdapterClass::Graph, "role_profile", Duration::from_secs(1), async {
            Ok::<_, CareerError>(42)
        })
        .await
        .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn elapsed_call_becomes_timeout() {
        let err = guarded(
            AdapterClass::Documents,
            "search",
            Duration::from_millis(10),
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, CareerError>(())
            },
        )
        .await
        .unwrap_err();
        match err {
            CareerError::AdapterError(e) => {
                assert!(e.is_timeout());
                assert!(e.to_string().contains("documents"));
            }
            other => panic!("expected adapter timeout, got {other}"),
        }
    }
}
