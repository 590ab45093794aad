//! Extractor registry abstraction
//!
//! The registry turns one candidate page URL into zero or more resolved,
//! playable stream descriptors. Site-specific extraction logic lives in the
//! host application; the orchestrator only needs this one entry point.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::errors::AppResult;
use crate::models::{UrlResult, UrlResultMeta};

/// Registry of URL extractors
///
/// `meta` is the candidate's metadata with the originating source's id and
/// label merged in as defaults; implementations are expected to carry it
/// into every [`UrlResult`] they produce.
#[async_trait]
pub trait ExtractorRegistry: Send + Sync {
    /// Resolve one candidate URL into playable stream descriptors.
    ///
    /// May fail with an arbitrary error per call; the orchestrator catches
    /// the failure and treats it as zero results from this URL.
    async fn handle(
        &self,
        ctx: &RequestContext,
        url: &str,
        meta: UrlResultMeta,
    ) -> AppResult<Vec<UrlResult>>;
}
