//! Caller-supplied timeouts for provider calls.

use std::future::Future;
use std::time::Duration;

use crate::error::{ProviderError, ProviderResult};

/// Run a provider call under a deadline.
///
/// Expiry is reported as `ProviderError::Timeout` carrying the operation
/// name, so a hung provider surfaces as a generation failure instead of
/// stalling the campaign.
pub async fn call_with_timeout<T, F>(
    operation: &str,
    limit: Duration,
    fut: F,
) -> ProviderResult<T>
where
    F: Future<Output = ProviderResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout {
            operation: operation.to_string(),
            after: limit,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_within_limit() {
        let result =
            call_with_timeout("fast_op", Duration::from_secs(1), async { Ok(7u32) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_expiry_maps_to_timeout_error() {
        let result = call_with_timeout("slow_op", Duration::from_millis(5), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(0u32)
        })
        .await;

        match result {
            Err(ProviderError::Timeout { operation, after }) => {
                assert_eq!(operation, "slow_op");
                assert_eq!(after, Duration::from_millis(5));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_inner_error_passes_through() {
        let result: ProviderResult<u32> =
            call_with_timeout("failing_op", Duration::from_secs(1), async {
                Err(ProviderError::service("boom"))
            })
            .await;
        assert!(matches!(result, Err(ProviderError::Service(_))));
    }
}
