//! Formatting of URL results into client-facing stream entries
//!
//! Everything here is pure: given a ranked [`UrlResult`] and the request
//! context, build the display name, title, synthetic filename and behavior
//! hints of one [`StreamEntry`]. The source label travels as a first-class
//! metadata field all the way into the filename; it is never re-parsed out
//! of already-rendered text.

use crate::context::RequestContext;
use crate::errors::AppError;
use crate::models::{
    BehaviorHints, ProxyHeaders, STREAM_TYPE_HLS, StreamEntry, StreamFormat, UrlResult,
};
use crate::sources::SourceHandler;
use crate::utils::{flag_emoji, format_bytes};

/// Glyph appended to every stream name while the stream has not been probed
const PENDING_GLYPH: &str = "⏳";
/// Suffix appended to the name of external redirects when enabled
const EXTERNAL_WARNING: &str = "⚠️ external";
/// Placeholder used when a result has no source attribution
const UNKNOWN_SOURCE: &str = "unknown";

/// Derives the quality label from the video height via fixed thresholds.
///
/// An unknown height yields no label at all rather than a misleading one.
pub fn quality_label(height: Option<u32>) -> Option<&'static str> {
    let height = height?;
    Some(match height {
        h if h >= 2160 => "2160p",
        h if h >= 1440 => "1440p",
        h if h >= 1080 => "1080p",
        h if h >= 720 => "720p",
        h if h >= 576 => "576p",
        h if h >= 480 => "480p",
        h if h >= 360 => "360p",
        _ => "240p",
    })
}

/// Fixed quality-label to resolution-tag lookup
pub fn resolution_tag(quality: &str) -> &'static str {
    match quality {
        "2160p" => "4K",
        "1440p" => "QHD",
        "1080p" => "FHD",
        "720p" => "HD",
        "576p" | "480p" | "360p" => "SD",
        _ => "n/a",
    }
}

/// Builds the final stream entry for one URL result
pub fn format_stream(ctx: &RequestContext, result: &UrlResult) -> StreamEntry {
    let quality = quality_label(result.meta.height);
    let source_id = result.meta.source_id.as_deref().unwrap_or(UNKNOWN_SOURCE);

    // Playback address selection: third-party id wins, then a direct URL,
    // then an address the client must open externally.
    let (url, external_url, yt_id) = if let Some(yt) = &result.yt_id {
        (None, None, Some(yt.clone()))
    } else if !result.is_external {
        (result.url.clone(), None, None)
    } else {
        (None, result.url.clone(), None)
    };

    let address = url.as_deref().or(external_url.as_deref());
    let insecure = address.map(|a| !a.starts_with("https://")).unwrap_or(false);
    let not_web_ready =
        result.format != StreamFormat::Mp4 || insecure || result.request_headers.is_some();

    StreamEntry {
        url,
        external_url,
        yt_id,
        name: display_name(ctx, result, quality),
        title: display_title(result),
        stream_type: STREAM_TYPE_HLS.to_string(),
        behavior_hints: BehaviorHints {
            binge_group: binge_group(&ctx.config.app_name, source_id),
            not_web_ready: not_web_ready.then_some(true),
            proxy_headers: result
                .request_headers
                .clone()
                .map(|request| ProxyHeaders { request }),
            video_size: result.meta.bytes,
            filename: Some(synthetic_filename(result, quality)),
        },
        quality: quality.map(str::to_string),
        resolution: quality.map(|q| resolution_tag(q).to_string()),
    }
}

/// Synthesizes the visible stream entry for a failed source
pub fn source_error_stream(
    ctx: &RequestContext,
    source: &dyn SourceHandler,
    err: &AppError,
) -> StreamEntry {
    StreamEntry {
        external_url: Some(source.base_url().to_string()),
        name: ctx.config.app_name.clone(),
        title: format!("{}\n⚠️ {}", source.label(), err),
        stream_type: STREAM_TYPE_HLS.to_string(),
        behavior_hints: BehaviorHints {
            binge_group: binge_group(&ctx.config.app_name, source.id()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Synthesizes the single instructive entry returned when no sources are
/// configured at all
pub fn no_sources_stream(ctx: &RequestContext) -> StreamEntry {
    StreamEntry {
        external_url: Some(ctx.configure_url()),
        name: ctx.config.app_name.clone(),
        title: "No sources configured.\nOpen the addon settings and enable at least one source."
            .to_string(),
        stream_type: STREAM_TYPE_HLS.to_string(),
        behavior_hints: BehaviorHints {
            binge_group: binge_group(&ctx.config.app_name, "configure"),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn display_name(ctx: &RequestContext, result: &UrlResult, quality: Option<&str>) -> String {
    let mut tags: Vec<String> = result
        .meta
        .country_codes
        .iter()
        .map(|code| flag_emoji(code))
        .collect();

    if let Some(q) = quality {
        tags.push(format!("{}P", q.strip_suffix('p').unwrap_or(q)));
    }
    tags.push(PENDING_GLYPH.to_string());
    if result.is_external && ctx.config.show_external_urls {
        tags.push(EXTERNAL_WARNING.to_string());
    }

    format!("{}\n{}", ctx.config.app_name, tags.join(" "))
}

fn display_title(result: &UrlResult) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &result.meta.title {
        lines.push(title.clone());
    }

    let source_label = result.meta.source_label.as_deref().unwrap_or(UNKNOWN_SOURCE);
    lines.push(format!("{} | {}", result.label, source_label));

    if let Some(bytes) = result.meta.bytes {
        lines.push(format!("💾 {}", format_bytes(bytes)));
    }

    if let Some(error) = &result.error {
        let source_id = result.meta.source_id.as_deref().unwrap_or(UNKNOWN_SOURCE);
        lines.push(format!("⚠️ {}: {}", source_id, error));
    }

    lines.join("\n")
}

/// `<quality|Unknown>.<sourceLabelAlnum>.<CC>[.<size>].mkv`
fn synthetic_filename(result: &UrlResult, quality: Option<&str>) -> String {
    let mut parts: Vec<String> = vec![quality.unwrap_or("Unknown").to_string()];

    let source = sanitize_alnum(
        result
            .meta
            .source_label
            .as_deref()
            .unwrap_or(UNKNOWN_SOURCE),
    );
    if !source.is_empty() {
        parts.push(source);
    }

    if let Some(code) = result.meta.country_codes.first() {
        let cc: String = code.chars().take(2).collect::<String>().to_uppercase();
        if !cc.is_empty() {
            parts.push(cc);
        }
    }

    if let Some(bytes) = result.meta.bytes {
        parts.push(format_bytes(bytes));
    }

    format!("{}.mkv", parts.join("."))
}

fn binge_group(app_name: &str, source_id: &str) -> String {
    format!("{}-{}", sanitize_alnum(app_name).to_lowercase(), source_id)
}

fn sanitize_alnum(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
