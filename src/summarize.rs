use log::debug;
use thiserror::Error;

use crate::Document;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Fixed instruction template. The whole document is stuffed into this one
/// prompt — no chunking or multi-pass summarization.
const PROMPT_TEMPLATE: &str = "\
Just give me a summary of the given below text in 500 words
Content:{text}
Go through above given content and only generate me a detailed summary of 500 words, \
first understand the topic and then generate the summary, don't ask any further questions.
This is not a chat, just give me the summary as I asked.";

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("summarization request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected completion response format")]
    MalformedResponse,
}

/// Turns a document into generated summary text
pub trait Summarizer {
    fn summarize(
        &self,
        doc: &Document,
    ) -> impl std::future::Future<Output = Result<String, SummarizeError>> + Send;
}

/// Summarizes via Groq's chat-completions API
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

impl Summarizer for GroqClient {
    async fn summarize(&self, doc: &Document) -> Result<String, SummarizeError> {
        debug!("Summarizing {} chars with model {}", doc.content.len(), self.model);

        let prompt = build_prompt(doc);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let resp = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SummarizeError::Api { status, body });
        }

        let json: serde_json::Value = resp.json().await?;
        extract_completion_text(&json)
    }
}

/// Embed the document content into the fixed instruction template.
/// Deterministic: the same document always yields the same prompt.
pub fn build_prompt(doc: &Document) -> String {
    PROMPT_TEMPLATE.replace("{text}", &doc.content)
}

fn extract_completion_text(json: &serde_json::Value) -> Result<String, SummarizeError> {
    if let Some(text) = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
    {
        return Ok(text.to_string());
    }
    Err(SummarizeError::MalformedResponse)
}
