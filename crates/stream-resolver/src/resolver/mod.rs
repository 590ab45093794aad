//! Resolution orchestrator
//!
//! Coordinates all configured sources and the extractor registry for one
//! title request. Scheduling runs in two phases: prioritized sources are
//! queried strictly in order, one at a time, stopping as soon as enough
//! playable results exist; the remaining sources are only fired, all at
//! once, when the prioritized ones came up short. No individual source or
//! extractor failure is ever fatal to the call — `resolve` always returns a
//! response.

pub mod ranking;
pub mod ttl;

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::context::RequestContext;
use crate::errors::{AppError, AppResult, SourceError};
use crate::extractors::ExtractorRegistry;
use crate::models::{
    CandidateUrl, ContentType, ResolveResponse, ResolveStats, StreamEntry, UrlResult,
};
use crate::sources::SourceHandler;
use crate::streams::format;

/// Everything one source's handling produced
struct SourceOutcome {
    results: Vec<UrlResult>,
    /// Visible entry synthesized for a failed source, when enabled
    error_stream: Option<StreamEntry>,
    failed: bool,
    extraction_failures: usize,
}

impl SourceOutcome {
    fn skipped() -> Self {
        Self {
            results: Vec::new(),
            error_stream: None,
            failed: false,
            extraction_failures: 0,
        }
    }
}

/// The resolution orchestrator
///
/// Holds the extractor registry; sources are passed per call so the host
/// can vary the set per request (user configuration).
pub struct Resolver {
    registry: Arc<dyn ExtractorRegistry>,
}

impl Resolver {
    pub fn new(registry: Arc<dyn ExtractorRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve playable streams for one title.
    ///
    /// Always returns a response; source and extraction failures are
    /// recovered locally and at most surface as visible error entries and a
    /// disabled cache lifetime.
    pub async fn resolve(
        &self,
        ctx: &RequestContext,
        sources: &[Arc<dyn SourceHandler>],
        content_type: ContentType,
        id: &str,
    ) -> ResolveResponse {
        if sources.is_empty() {
            // Do not cache a misconfiguration response.
            return ResolveResponse {
                streams: vec![format::no_sources_stream(ctx)],
                ttl_ms: None,
                stats: ResolveStats::default(),
            };
        }

        let eligible: Vec<Arc<dyn SourceHandler>> = sources
            .iter()
            .filter(|s| s.supports(content_type))
            .cloned()
            .collect();
        let (prioritized, other) =
            partition_by_priority(&eligible, &ctx.config.prioritized_sources);
        let min_needed = min_needed(content_type);

        let mut results: Vec<UrlResult> = Vec::new();
        let mut error_streams: Vec<StreamEntry> = Vec::new();
        let mut stats = ResolveStats::default();
        let mut non_error = 0usize;

        // Phase 1: prioritized sources run strictly in order, each awaited
        // fully before the next starts. Stop as soon as enough playable
        // results exist.
        for source in &prioritized {
            let outcome = self.handle_source(ctx, source.as_ref(), content_type, id).await;
            stats.prioritized_queried += 1;
            non_error += merge_outcome(outcome, &mut results, &mut error_streams, &mut stats);
            if non_error >= min_needed {
                break;
            }
        }

        // Phase 2: fallback. Only when phase 1 came up short, fire all
        // remaining sources at once and wait for every one of them.
        if non_error < min_needed && !other.is_empty() {
            let outcomes = join_all(
                other
                    .iter()
                    .map(|s| self.handle_source(ctx, s.as_ref(), content_type, id)),
            )
            .await;
            stats.fallback_queried = other.len();
            for outcome in outcomes {
                non_error +=
                    merge_outcome(outcome, &mut results, &mut error_streams, &mut stats);
            }
        }

        results.sort_by(ranking::compare);

        let ttl_ms = ttl::response_ttl(stats.source_errors, &results);

        let show_errors = ctx.config.show_errors;
        let mut streams = error_streams;
        streams.extend(
            results
                .iter()
                .filter(|r| !r.is_error() || show_errors)
                .map(|r| format::format_stream(ctx, r)),
        );

        debug!(
            content_type = %content_type,
            id,
            prioritized_queried = stats.prioritized_queried,
            fallback_queried = stats.fallback_queried,
            source_errors = stats.source_errors,
            extraction_failures = stats.extraction_failures,
            results = results.len(),
            ttl_ms,
            "resolve complete"
        );

        ResolveResponse {
            streams,
            ttl_ms,
            stats,
        }
    }

    /// Handle one source end to end: fetch its candidates, extract them all
    /// concurrently, recover any failure locally.
    async fn handle_source(
        &self,
        ctx: &RequestContext,
        source: &dyn SourceHandler,
        content_type: ContentType,
        id: &str,
    ) -> SourceOutcome {
        if !source.supports(content_type) {
            return SourceOutcome::skipped();
        }

        let fetched = match ctx.config.source_timeout() {
            Some(deadline) => {
                match tokio::time::timeout(
                    deadline,
                    self.fetch_and_extract(ctx, source, content_type, id),
                )
                .await
                {
                    Ok(outcome) => outcome,
                    Err(_) => Err(AppError::Source(SourceError::Timeout {
                        source_name: source.id().to_string(),
                        timeout_secs: ctx.config.source_timeout_secs,
                    })),
                }
            }
            None => self.fetch_and_extract(ctx, source, content_type, id).await,
        };

        match fetched {
            Ok((results, extraction_failures)) => SourceOutcome {
                results,
                error_stream: None,
                failed: false,
                extraction_failures,
            },
            Err(err) => {
                warn!(source = source.id(), error = %err, "source failed");
                let error_stream = ctx
                    .config
                    .show_errors
                    .then(|| format::source_error_stream(ctx, source, &err));
                SourceOutcome {
                    results: Vec::new(),
                    error_stream,
                    failed: true,
                    extraction_failures: 0,
                }
            }
        }
    }

    /// Fetch a source's candidates, then run the extractor registry over all
    /// of them concurrently. A failed extraction only loses that one URL.
    async fn fetch_and_extract(
        &self,
        ctx: &RequestContext,
        source: &dyn SourceHandler,
        content_type: ContentType,
        id: &str,
    ) -> AppResult<(Vec<UrlResult>, usize)> {
        let candidates = source.handle(ctx, content_type, id).await?;
        debug!(
            source = source.id(),
            candidates = candidates.len(),
            "source produced candidates"
        );

        let extractions = join_all(candidates.into_iter().map(|candidate| {
            let CandidateUrl { url, meta } = candidate;
            let meta = meta
                .unwrap_or_default()
                .with_source_defaults(source.id(), source.label());
            async move {
                let outcome = self.registry.handle(ctx, &url, meta).await;
                (url, outcome)
            }
        }))
        .await;

        let mut results = Vec::new();
        let mut failures = 0usize;
        for (url, outcome) in extractions {
            match outcome {
                Ok(mut url_results) => results.append(&mut url_results),
                Err(err) => {
                    failures += 1;
                    warn!(%url, error = %err, "extraction failed, skipping url");
                }
            }
        }

        Ok((results, failures))
    }
}

/// Results needed before the fallback sources can be skipped
fn min_needed(content_type: ContentType) -> usize {
    match content_type {
        ContentType::Movie => 1,
        ContentType::Series => 2,
    }
}

/// Splits the eligible sources into the configured priority order and the
/// rest. Prioritized sources keep the allow-list's order; the order of the
/// rest is irrelevant because they only ever run concurrently.
fn partition_by_priority(
    eligible: &[Arc<dyn SourceHandler>],
    priority: &[String],
) -> (Vec<Arc<dyn SourceHandler>>, Vec<Arc<dyn SourceHandler>>) {
    let mut prioritized = Vec::new();
    for id in priority {
        for source in eligible {
            if source.id() == id.as_str() {
                prioritized.push(source.clone());
            }
        }
    }

    let other = eligible
        .iter()
        .filter(|s| !priority.iter().any(|id| id.as_str() == s.id()))
        .cloned()
        .collect();

    (prioritized, other)
}

/// Folds one source's outcome into the shared aggregation state; returns the
/// number of non-error results it newly contributed.
fn merge_outcome(
    outcome: SourceOutcome,
    results: &mut Vec<UrlResult>,
    error_streams: &mut Vec<StreamEntry>,
    stats: &mut ResolveStats,
) -> usize {
    let contributed = outcome.results.iter().filter(|r| !r.is_error()).count();
    results.extend(outcome.results);
    if let Some(stream) = outcome.error_stream {
        error_streams.push(stream);
    }
    if outcome.failed {
        stats.source_errors += 1;
    }
    stats.extraction_failures += outcome.extraction_failures;
    contributed
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::errors::AppResult;

    struct StubSource {
        id: String,
    }

    #[async_trait]
    impl SourceHandler for StubSource {
        fn id(&self) -> &str {
            &self.id
        }
        fn label(&self) -> &str {
            &self.id
        }
        fn base_url(&self) -> &str {
            "https://example.com"
        }
        fn content_types(&self) -> &[ContentType] {
            &[ContentType::Movie, ContentType::Series]
        }
        async fn handle(
            &self,
            _ctx: &RequestContext,
            _content_type: ContentType,
            _id: &str,
        ) -> AppResult<Vec<CandidateUrl>> {
            Ok(Vec::new())
        }
    }

    fn stub(id: &str) -> Arc<dyn SourceHandler> {
        Arc::new(StubSource { id: id.to_string() })
    }

    #[test]
    fn test_min_needed_per_content_type() {
        assert_eq!(min_needed(ContentType::Movie), 1);
        assert_eq!(min_needed(ContentType::Series), 2);
    }

    #[test]
    fn test_partition_keeps_priority_order() {
        let sources = [stub("c"), stub("a"), stub("b")];
        let priority = vec!["b".to_string(), "a".to_string()];

        let (prioritized, other) = partition_by_priority(&sources, &priority);

        let prioritized_ids: Vec<&str> = prioritized.iter().map(|s| s.id()).collect();
        let other_ids: Vec<&str> = other.iter().map(|s| s.id()).collect();
        assert_eq!(prioritized_ids, ["b", "a"]);
        assert_eq!(other_ids, ["c"]);
    }

    #[test]
    fn test_partition_with_empty_priority_list() {
        let sources = [stub("a"), stub("b")];

        let (prioritized, other) = partition_by_priority(&sources, &[]);

        assert!(prioritized.is_empty());
        assert_eq!(other.len(), 2);
    }
}
