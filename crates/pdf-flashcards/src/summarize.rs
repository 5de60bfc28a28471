//! One-shot document summary through an OpenAI-compatible completions API

use crate::deck::summary_text;
use crate::options::SummarizerOptions;
use crate::types::{Flashcard, FlashcardError, Result};
use serde::{Deserialize, Serialize};

const PROMPT_PREFIX: &str = "Summarize the following content: ";

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct CompletionRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub fn build_prompt(text: &str) -> String {
    format!("{PROMPT_PREFIX}{text}")
}

#[derive(Debug, Clone)]
pub struct Summarizer {
    options: SummarizerOptions,
    client: reqwest::Client,
}

impl Summarizer {
    pub fn new(options: SummarizerOptions) -> Result<Self> {
        options.validate()?;
        let client = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .build()?;
        Ok(Self { options, client })
    }

    pub fn options(&self) -> &SummarizerOptions {
        &self.options
    }

    /// Summarize a deck, refusing an empty one before any request is made
    pub async fn summarize_cards(&self, cards: &[Flashcard]) -> Result<String> {
        if cards.is_empty() {
            return Err(FlashcardError::EmptyDeck);
        }
        self.summarize(&summary_text(cards)).await
    }

    pub async fn summarize(&self, text: &str) -> Result<String> {
        let url = format!("{}/completions", self.options.base_url);
        let body = request_body(&self.options, text);
        let api_key = self
            .options
            .api_key
            .as_deref()
            .ok_or(FlashcardError::MissingApiKey)?;

        log::info!(
            "Requesting summary of {} characters from {}",
            text.len(),
            self.options.model
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(FlashcardError::Api(error_message(status, &bytes)));
        }

        let parsed: CompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| FlashcardError::Api(format!("Malformed completion response: {e}")))?;
        parse_completion(parsed)
    }
}

pub(crate) fn request_body<'a>(options: &'a SummarizerOptions, text: &str) -> CompletionRequest<'a> {
    CompletionRequest {
        model: &options.model,
        prompt: build_prompt(text),
        max_tokens: options.max_tokens,
        temperature: options.temperature,
    }
}

pub(crate) fn parse_completion(response: CompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text.trim().to_string())
        .ok_or_else(|| FlashcardError::Api("No response content".to_string()))
}

fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(err) => format!("{status}: {}", err.error.message),
        Err(_) => status.to_string(),
    }
}
