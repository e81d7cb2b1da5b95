pub mod config;
pub mod output;
pub mod pipeline;
pub mod summarize;
pub mod transcript;
pub mod webpage;

use serde::Serialize;

/// A single timed transcript fragment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Extracted text wrapped in the uniform shape the summarizer consumes,
/// regardless of where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub content: String,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

/// The two supported kinds of content behind a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Webpage,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Video => write!(f, "video"),
            ContentKind::Webpage => write!(f, "webpage"),
        }
    }
}

/// A classified URL. Built once by [`ContentSource::from_url`]; downstream
/// stages match on the variant instead of re-checking the URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Video { id: String },
    Webpage { url: String },
}

impl ContentSource {
    /// Classify a URL and, for video links, extract the video ID.
    ///
    /// Returns `None` only for a video-hosting URL with no extractable ID;
    /// every other URL is a webpage.
    pub fn from_url(url: &str) -> Option<Self> {
        if is_video_url(url) {
            extract_video_id(url).map(|id| ContentSource::Video { id })
        } else {
            Some(ContentSource::Webpage { url: url.to_string() })
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            ContentSource::Video { .. } => ContentKind::Video,
            ContentSource::Webpage { .. } => ContentKind::Webpage,
        }
    }
}

/// The terminal result of one summarization run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub url: String,
    pub kind: ContentKind,
    pub summary: String,
}

/// Whether a URL points at a known video host (long or short-link form)
pub fn is_video_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Extract the video ID from a video URL.
///
/// Two shapes are supported: a `v=` query parameter (value runs to the next
/// `&` or end of string), and the final path segment for short-link,
/// `/embed/` and `/shorts/` URLs. No match yields `None`.
pub fn extract_video_id(url: &str) -> Option<String> {
    let url = url.trim();

    // youtube.com/watch?v=ID — when the query marker is present, the ID
    // must come from it; an empty value is a failed extraction, not a
    // cue to fall back to path splitting
    if url.contains("v=") {
        return regex::Regex::new(r"[?&]v=([A-Za-z0-9_-]+)")
            .unwrap()
            .captures(url)
            .map(|caps| caps[1].to_string());
    }

    // youtu.be/ID, youtube.com/embed/ID, youtube.com/shorts/ID
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    if !segment.is_empty()
        && regex::Regex::new(r"^[A-Za-z0-9_-]+$").unwrap().is_match(segment)
    {
        return Some(segment.to_string());
    }

    None
}

/// Join transcript fragments into one text blob, single-space separated
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
