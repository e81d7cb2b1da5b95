use log::{debug, info};
use thiserror::Error;

use crate::summarize::{SummarizeError, Summarizer};
use crate::transcript::{TranscriptError, TranscriptFetcher};
use crate::webpage::{PageError, PageFetcher};
use crate::{ContentSource, Document, Report, join_segments};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no URL provided")]
    EmptyUrl,
    #[error("not a valid URL: {0}")]
    InvalidUrl(String),
    #[error("could not extract a video ID from: {0}")]
    VideoId(String),
    #[error("failed to fetch transcript (captions may be disabled): {0}")]
    Transcript(#[from] TranscriptError),
    #[error("failed to load content from: {0}")]
    PageLoad(String),
    #[error(transparent)]
    Page(#[from] PageError),
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

/// One-URL summarization pipeline: validate, classify, extract text,
/// summarize. Each run is independent; nothing is shared or retained
/// across runs.
pub struct Pipeline<T, P, S> {
    transcripts: T,
    pages: P,
    summarizer: S,
}

impl<T, P, S> Pipeline<T, P, S>
where
    T: TranscriptFetcher,
    P: PageFetcher,
    S: Summarizer,
{
    pub fn new(transcripts: T, pages: P, summarizer: S) -> Self {
        Self { transcripts, pages, summarizer }
    }

    pub async fn run(&self, raw_url: &str) -> Result<Report, PipelineError> {
        let url = raw_url.trim();
        if url.is_empty() {
            return Err(PipelineError::EmptyUrl);
        }
        url::Url::parse(url).map_err(|_| PipelineError::InvalidUrl(url.to_string()))?;

        let source = ContentSource::from_url(url)
            .ok_or_else(|| PipelineError::VideoId(url.to_string()))?;
        debug!("Classified {url} as {}", source.kind());

        let text = match &source {
            ContentSource::Video { id } => {
                let segments = self.transcripts.fetch(id).await?;
                debug!("Fetched {} transcript segments for {id}", segments.len());
                join_segments(&segments)
            }
            ContentSource::Webpage { url } => self
                .pages
                .fetch_text(url)
                .await?
                .ok_or_else(|| PipelineError::PageLoad(url.clone()))?,
        };

        let doc = Document::new(text);
        let summary = self.summarizer.summarize(&doc).await?;
        info!("Summarized {url} ({})", source.kind());

        Ok(Report {
            url: url.to_string(),
            kind: source.kind(),
            summary,
        })
    }
}
