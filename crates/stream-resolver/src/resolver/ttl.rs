//! Response cache lifetime policy
//!
//! The orchestrator does not cache anything itself; it only recommends a
//! lifetime to whatever caching layer wraps it. A response assembled while
//! any source failed may be incomplete, so it is never cacheable.

use crate::models::UrlResult;

/// How long a "nothing found" outcome may be cached, in milliseconds
pub const EMPTY_RESULT_TTL_MS: u64 = 900_000;

/// Computes the recommended cache lifetime for one response.
///
/// Returns `None` (uncacheable) when any source errored this call or when
/// at least one result's own freshness is unknown; otherwise the response
/// is only valid as long as its shortest-lived constituent result.
pub fn response_ttl(source_errors: usize, results: &[UrlResult]) -> Option<u64> {
    if source_errors > 0 {
        return None;
    }
    if results.is_empty() {
        return Some(EMPTY_RESULT_TTL_MS);
    }

    let mut min = u64::MAX;
    for result in results {
        match result.meta.ttl_ms {
            Some(ttl) => min = min.min(ttl),
            None => return None,
        }
    }
    Some(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrlResultMeta;

    fn result_with_ttl(ttl_ms: Option<u64>) -> UrlResult {
        UrlResult {
            url: Some("https://example.com/a.mp4".to_string()),
            label: "a".to_string(),
            meta: UrlResultMeta {
                ttl_ms,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_aggregate_caches_briefly() {
        assert_eq!(response_ttl(0, &[]), Some(EMPTY_RESULT_TTL_MS));
    }

    #[test]
    fn test_source_error_disables_caching() {
        assert_eq!(response_ttl(1, &[]), None);
        assert_eq!(response_ttl(1, &[result_with_ttl(Some(60_000))]), None);
    }

    #[test]
    fn test_missing_per_result_ttl_disables_caching() {
        let results = [result_with_ttl(Some(60_000)), result_with_ttl(None)];
        assert_eq!(response_ttl(0, &results), None);
    }

    #[test]
    fn test_minimum_of_all_ttls() {
        let results = [
            result_with_ttl(Some(60_000)),
            result_with_ttl(Some(30_000)),
            result_with_ttl(Some(90_000)),
        ];
        assert_eq!(response_ttl(0, &results), Some(30_000));
    }
}
