use log::debug;
use scraper::{Html, Selector};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// How the page fetcher presents itself to servers.
///
/// The defaults trade strictness for reachability: a browser User-Agent to
/// get past scraper blocking, and acceptance of invalid certificates.
#[derive(Debug, Clone)]
pub struct FetchPolicy {
    pub user_agent: String,
    pub accept_invalid_certs: bool,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5_1) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/116.0.0.0 Safari/537.36"
                .to_string(),
            accept_invalid_certs: true,
        }
    }
}

/// Source of body text for generic webpage URLs
pub trait PageFetcher {
    fn fetch_text(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, PageError>> + Send;
}

/// Fetches a page over HTTP and extracts its readable text
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    pub fn new(policy: &FetchPolicy) -> Result<Self, PageError> {
        let client = reqwest::Client::builder()
            .user_agent(&policy.user_agent)
            .danger_accept_invalid_certs(policy.accept_invalid_certs)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for PageClient {
    async fn fetch_text(&self, url: &str) -> Result<Option<String>, PageError> {
        debug!("Fetching page: {url}");

        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let text = extract_text(&html);
        if text.trim().is_empty() {
            debug!("No readable content at {url}");
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }
}

/// Extract readable text content from an HTML document.
///
/// Prefers a main-content container when one exists, then collects
/// paragraph-level text with whitespace collapsed.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let main_selectors = ["article", "main", "[role='main']"];
    for selector_str in main_selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = collect_paragraphs(&Html::parse_fragment(&element.html()));
                if !text.trim().is_empty() {
                    return text;
                }
            }
        }
    }

    collect_paragraphs(&document)
}

fn collect_paragraphs(document: &Html) -> String {
    let content_selector = Selector::parse("p, h1, h2, h3, h4, h5, h6, li").unwrap();

    let mut paragraphs: Vec<String> = Vec::new();
    for element in document.select(&content_selector) {
        let text: String = element.text().collect::<Vec<_>>().join(" ");
        let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !cleaned.is_empty() {
            paragraphs.push(cleaned);
        }
    }

    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_from_article() {
        let html = r#"<html><body>
            <nav><li>Home</li><li>About</li></nav>
            <article>
                <h1>A Title</h1>
                <p>First paragraph of the article body.</p>
                <p>Second paragraph with more detail.</p>
            </article>
        </body></html>"#;

        let text = extract_text(html);
        assert!(text.contains("A Title"));
        assert!(text.contains("First paragraph of the article body."));
        assert!(text.contains("Second paragraph with more detail."));
        assert!(!text.contains("Home"));
    }

    #[test]
    fn test_extract_text_without_main_container() {
        let html = r#"<html><body>
            <p>Loose paragraph one.</p>
            <p>Loose   paragraph
               two.</p>
        </body></html>"#;

        let text = extract_text(html);
        assert_eq!(text, "Loose paragraph one.\n\nLoose paragraph two.");
    }

    #[test]
    fn test_extract_text_empty_document() {
        let html = "<html><body><div>bare div text is not collected</div></body></html>";
        assert_eq!(extract_text(html), "");
    }

    #[test]
    fn test_default_policy() {
        let policy = FetchPolicy::default();
        assert!(policy.user_agent.starts_with("Mozilla/5.0"));
        assert!(policy.accept_invalid_certs);
    }
}
