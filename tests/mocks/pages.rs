use std::sync::{Arc, Mutex};

use urlsum::webpage::{PageError, PageFetcher};

#[derive(Clone)]
pub struct MockPages {
    pub text: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockPages {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A fetcher whose target yields no readable document
    pub fn empty() -> Self {
        Self {
            text: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl PageFetcher for MockPages {
    async fn fetch_text(&self, url: &str) -> Result<Option<String>, PageError> {
        self.calls.lock().unwrap().push(url.to_string());
        Ok(self.text.clone())
    }
}
