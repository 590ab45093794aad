//! Core data models
//!
//! Everything that flows through one `resolve` call lives here: the closed
//! content-type enumeration, the candidate URLs produced by sources, the URL
//! results produced by extractors, and the wire-level stream entries handed
//! back to the addon client. All per-request data is owned by a single
//! `resolve` invocation and discarded after it returns.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Content type a title resolution request refers to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
}

/// Container/codec tag of a resolved stream
///
/// `Mp4` is the only container clients play directly in the browser; every
/// other format is marked not-web-ready when the stream entry is built.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StreamFormat {
    Mp4,
    Hls,
    #[default]
    Unknown,
}

/// A candidate page URL produced by a source
///
/// Consumed immediately by the extractor registry; not retained afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<UrlResultMeta>,
}

impl CandidateUrl {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            meta: None,
        }
    }

    pub fn with_meta<S: Into<String>>(url: S, meta: UrlResultMeta) -> Self {
        Self {
            url: url.into(),
            meta: Some(meta),
        }
    }
}

/// Optional metadata attached to a URL result
///
/// All fields are optional; candidate-level values win over source-level
/// defaults when the two are merged (see [`UrlResultMeta::with_source_defaults`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlResultMeta {
    /// Video vertical resolution in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// File size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    /// Ordered ISO country codes (audio/subtitle languages)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country_codes: Vec<String>,
    /// Identifier of the source that produced this result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Display label of the source that produced this result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
    /// Original title of the content, when the source knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Suggested cache lifetime for this one result, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_ms: Option<u64>,
}

impl UrlResultMeta {
    /// Fill in source id/label defaults without overwriting values the
    /// candidate already carries.
    pub fn with_source_defaults(mut self, source_id: &str, source_label: &str) -> Self {
        self.source_id
            .get_or_insert_with(|| source_id.to_string());
        self.source_label
            .get_or_insert_with(|| source_label.to_string());
        self
    }
}

/// A resolved, playable stream descriptor — the unit the orchestrator
/// aggregates and ranks
///
/// Invariant: exactly one of `{url, yt_id, is_external + url}` identifies how
/// the client should play the stream. A result with `error` set never carries
/// a usable url/yt_id; it is only kept so the user can be shown why a stream
/// is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlResult {
    /// Resolved playable address (direct, or to open externally)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Third-party video identifier, mutually exclusive with `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yt_id: Option<String>,
    /// True when `url` is a redirect the client must open externally
    #[serde(default)]
    pub is_external: bool,
    /// Human string describing this particular stream (quality/language tag)
    pub label: String,
    #[serde(default)]
    pub meta: UrlResultMeta,
    #[serde(default)]
    pub format: StreamFormat,
    /// Header name → value mapping required to play the URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<HashMap<String, String>>,
    /// Failure marker; present means this "result" represents a failed
    /// resolution, carried forward only for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UrlResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Height used for ranking; missing counts as 0
    pub fn height_or_zero(&self) -> u32 {
        self.meta.height.unwrap_or(0)
    }

    /// File size used for ranking; missing counts as 0
    pub fn bytes_or_zero(&self) -> u64 {
        self.meta.bytes.unwrap_or(0)
    }
}

/// Custom request headers a proxying player must send
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyHeaders {
    pub request: HashMap<String, String>,
}

/// Presentation hints attached to a stream entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorHints {
    /// All streams of one source id share one binge group
    pub binge_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_web_ready: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_headers: Option<ProxyHeaders>,
    /// File size hint in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// A formatted stream entry, ready for the addon client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEntry {
    /// Directly playable address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Address the client must open externally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Third-party video identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yt_id: Option<String>,
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub stream_type: String,
    pub behavior_hints: BehaviorHints,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

/// Stream type every entry is tagged with on the wire
pub const STREAM_TYPE_HLS: &str = "hls";

/// Response of one `resolve` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub streams: Vec<StreamEntry>,
    /// Recommended cache lifetime in milliseconds; absent means uncacheable
    #[serde(rename = "ttl", skip_serializing_if = "Option::is_none")]
    pub ttl_ms: Option<u64>,
    /// Per-call counters, for logs and tests; never serialized
    #[serde(skip)]
    pub stats: ResolveStats,
}

/// Counters collected over one `resolve` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Prioritized sources actually queried in phase 1
    pub prioritized_queried: usize,
    /// Fallback sources queried in phase 2 (0 when phase 2 was skipped)
    pub fallback_queried: usize,
    /// Sources whose candidate-producing call failed or timed out
    pub source_errors: usize,
    /// Candidate URLs whose extraction failed
    pub extraction_failures: usize,
}
