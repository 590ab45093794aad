//! Result ordering
//!
//! The aggregate is sorted with a strict precedence so the final stream
//! order is fully deterministic given the results, independent of the
//! arrival order of concurrent source calls: error results strictly last,
//! external redirects after directly playable streams, then higher
//! resolution, then larger files, then label order.

use std::cmp::Ordering;

use crate::models::UrlResult;

/// Comparator implementing the ranking precedence. Used with the stable
/// `sort_by`, so ties keep their aggregation order.
pub fn compare(a: &UrlResult, b: &UrlResult) -> Ordering {
    a.is_error()
        .cmp(&b.is_error())
        .then_with(|| a.is_external.cmp(&b.is_external))
        .then_with(|| b.height_or_zero().cmp(&a.height_or_zero()))
        .then_with(|| b.bytes_or_zero().cmp(&a.bytes_or_zero()))
        .then_with(|| a.label.cmp(&b.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrlResultMeta;

    fn result(label: &str, height: Option<u32>, bytes: Option<u64>) -> UrlResult {
        UrlResult {
            url: Some(format!("https://example.com/{label}")),
            label: label.to_string(),
            meta: UrlResultMeta {
                height,
                bytes,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn labels(results: &[UrlResult]) -> Vec<&str> {
        results.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_errors_sort_last() {
        let mut results = vec![
            UrlResult {
                error: Some("broken".to_string()),
                ..result("broken-4k", Some(2160), None)
            },
            result("ok-sd", Some(360), None),
        ];
        results.sort_by(compare);

        assert_eq!(labels(&results), ["ok-sd", "broken-4k"]);
    }

    #[test]
    fn test_external_sorts_after_internal() {
        let mut results = vec![
            UrlResult {
                is_external: true,
                ..result("ext-4k", Some(2160), None)
            },
            result("int-sd", Some(360), None),
        ];
        results.sort_by(compare);

        assert_eq!(labels(&results), ["int-sd", "ext-4k"]);
    }

    #[test]
    fn test_height_descends_missing_counts_as_zero() {
        let mut results = vec![
            result("none", None, None),
            result("hd", Some(720), None),
            result("fhd", Some(1080), None),
        ];
        results.sort_by(compare);

        assert_eq!(labels(&results), ["fhd", "hd", "none"]);
    }

    #[test]
    fn test_bytes_break_height_ties() {
        let mut results = vec![
            result("small", Some(1080), Some(700_000_000)),
            result("large", Some(1080), Some(2_000_000_000)),
        ];
        results.sort_by(compare);

        assert_eq!(labels(&results), ["large", "small"]);
    }

    #[test]
    fn test_label_breaks_remaining_ties_case_aware() {
        let mut results = vec![
            result("b", Some(720), None),
            result("a", Some(720), None),
            result("B", Some(720), None),
        ];
        results.sort_by(compare);

        // Plain lexical order: uppercase sorts before lowercase
        assert_eq!(labels(&results), ["B", "a", "b"]);
    }

    #[test]
    fn test_full_precedence() {
        let mut results = vec![
            UrlResult {
                error: Some("x".to_string()),
                ..result("err", Some(2160), Some(9_999_999_999))
            },
            UrlResult {
                is_external: true,
                ..result("ext", Some(2160), Some(9_999_999_999))
            },
            result("low", Some(480), None),
            result("high", Some(2160), None),
        ];
        results.sort_by(compare);

        assert_eq!(labels(&results), ["high", "low", "ext", "err"]);
    }
}
