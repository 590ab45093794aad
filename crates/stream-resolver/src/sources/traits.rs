//! Source handler trait definitions
//!
//! A source is an immutable configuration object plus a candidate-producing
//! behavior, registered once at startup and read-only thereafter. The
//! orchestrator treats every source identically; site-specific scraping
//! lives entirely behind this trait.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::errors::AppResult;
use crate::models::{CandidateUrl, ContentType};

/// Core source handler trait
#[async_trait]
pub trait SourceHandler: Send + Sync {
    /// Unique identifier of this source (stable, lowercase)
    fn id(&self) -> &str;

    /// Display label of this source
    fn label(&self) -> &str;

    /// Base URL of the site backing this source, used when a failure is
    /// surfaced to the user
    fn base_url(&self) -> &str;

    /// Content types this source can produce candidates for
    fn content_types(&self) -> &[ContentType];

    fn supports(&self, content_type: ContentType) -> bool {
        self.content_types().contains(&content_type)
    }

    /// Produce candidate page URLs for the given title.
    ///
    /// May fail with an arbitrary error; the orchestrator recovers the
    /// failure locally and never lets it abort sibling sources.
    async fn handle(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
        id: &str,
    ) -> AppResult<Vec<CandidateUrl>>;
}
