use std::sync::{Arc, Mutex};

use urlsum::Segment;
use urlsum::transcript::{TranscriptError, TranscriptFetcher};

#[derive(Clone)]
pub struct MockTranscripts {
    pub segments: Vec<Segment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub captions_disabled: bool,
}

impl MockTranscripts {
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Segment {
                text: text.to_string(),
                start: i as f64,
                duration: 1.0,
            })
            .collect();
        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            captions_disabled: false,
        }
    }

    /// A fetcher whose video has captions disabled
    pub fn failing() -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            captions_disabled: true,
        }
    }
}

impl TranscriptFetcher for MockTranscripts {
    async fn fetch(&self, video_id: &str) -> Result<Vec<Segment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.captions_disabled {
            return Err(TranscriptError::CaptionsUnavailable(video_id.to_string()));
        }
        Ok(self.segments.clone())
    }
}
