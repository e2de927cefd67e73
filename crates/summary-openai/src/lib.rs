//! Blocking chat-completion client and the chapter summarization flow.

pub mod prompt;
pub mod types;

pub use types::{ChatRequest, ChatResponse, Choice, Message};

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use summary_core::error::{Result, SummaryError};

/// Chat-completion API client. Explicitly constructed and passed around;
/// holds the key, base URL, and a blocking HTTP client with a fixed
/// request timeout.
#[derive(Debug)]
pub struct OpenAiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// Create a client with the given API key and base URL.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummaryError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Create a client from a plain-text key file, trimmed of whitespace.
    /// A missing or empty file is a configuration error.
    pub fn from_key_file(
        path: &Path,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SummaryError::Config(format!(
                "Failed to read API key from {}: {}",
                path.display(),
                e
            ))
        })?;
        let key = contents.trim();
        if key.is_empty() {
            return Err(SummaryError::Config(format!(
                "API key file {} is empty",
                path.display()
            )));
        }
        Self::new(key, base_url, timeout)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat completion request and return the first choice's message
    /// content.
    pub fn chat_completion(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| SummaryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::warn!("API error ({}): {}", status, body);
            return Err(SummaryError::Api(format!("{}: {}", status, body)));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| SummaryError::Parse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SummaryError::Parse("Response contained no choices".to_string()))
    }

    /// Generate a sanitized LaTeX summary for one chapter: build the prompt,
    /// request a single near-deterministic completion, sanitize it, and
    /// reject it if its braces do not balance.
    pub fn summarize(
        &self,
        model: &str,
        temperature: f32,
        chapter_text: &str,
        chapter_name: &str,
    ) -> Result<String> {
        let request = ChatRequest::new(model)
            .message(Message::user(prompt::build_prompt(
                chapter_name,
                chapter_text,
            )))
            .temperature(temperature);

        let raw = self.chat_completion(&request)?;
        if raw.trim().is_empty() {
            return Err(SummaryError::Api(format!(
                "Empty completion for chapter '{}'",
                chapter_name
            )));
        }

        let summary = summary_latex::sanitize::sanitize(&raw);
        summary_latex::validate::validate_braces(&summary)?;
        Ok(summary)
    }
}
