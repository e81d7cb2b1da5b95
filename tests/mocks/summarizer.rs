use std::sync::{Arc, Mutex};

use urlsum::Document;
use urlsum::summarize::{SummarizeError, Summarizer};

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }
}

impl Summarizer for MockSummarizer {
    async fn summarize(&self, doc: &Document) -> Result<String, SummarizeError> {
        self.calls.lock().unwrap().push(doc.content.clone());
        if self.fail {
            return Err(SummarizeError::Api {
                status: 500,
                body: "model unavailable".to_string(),
            });
        }
        Ok(self.summary.clone())
    }
}
