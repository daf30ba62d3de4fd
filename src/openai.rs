//! Minimal OpenAI client for our two call shapes.
//!
//! We only call chat.completions: strict-JSON word generation and plain-text
//! hint generation. Remote failures never reach game flow as errors; the
//! public surface swallows them into empty results after logging a diagnostic.
//!
//! NOTE: We never log the API key and we never log response contents.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::config::{fill_template, Prompts};
use crate::domain::WordDifficulty;

const WORD_MAX_TOKENS: u32 = 150;
const HINT_MAX_TOKENS: u32 = 50;

/// One structured word candidate extracted from a model response.
#[derive(Clone, Debug, PartialEq)]
pub struct WordChoice {
  pub word: String,
  pub difficulty: WordDifficulty,
}

#[derive(Clone)]
pub struct OpenAIClient {
  client: reqwest::Client,
  api_key: String,
  base_url: String,
  model: String,
  prompts: Prompts,
}

impl OpenAIClient {
  /// Construct a client with the given API key and default endpoint/model.
  pub fn new(api_key: impl Into<String>) -> Self {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(20))
      .build()
      .unwrap_or_else(|_| reqwest::Client::new());

    Self {
      client,
      api_key: api_key.into(),
      base_url: "https://api.openai.com/v1".into(),
      model: "gpt-4o-mini".into(),
      prompts: Prompts::load(),
    }
  }

  /// Construct the client if we find OPENAI_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("OPENAI_API_KEY").ok()?;
    let mut c = Self::new(api_key);
    if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
      c.base_url = base_url;
    }
    if let Ok(model) = std::env::var("OPENAI_MODEL") {
      c.model = model;
    }
    Some(c)
  }

  /// Point the client at a different chat-completions host.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_prompts(mut self, prompts: Prompts) -> Self {
    self.prompts = prompts;
    self
  }

  pub fn prompts(&self) -> &Prompts {
    &self.prompts
  }

  /// Generate a single word candidate for a category.
  pub async fn generate_word(&self, category: &str) -> Option<WordChoice> {
    self.generate_words(category, 1).await.into_iter().next()
  }

  /// Generate word candidates for a category.
  ///
  /// The prompt asks for one JSON object per response, so this usually yields
  /// at most one item regardless of `count`. Callers must not assume `count`
  /// items come back. Transport or envelope failures yield an empty vec.
  #[instrument(level = "info", skip(self), fields(%category, count, model = %self.model))]
  pub async fn generate_words(&self, category: &str, count: usize) -> Vec<WordChoice> {
    let user = fill_template(&self.prompts.word_user_template, &[("category", category)]);
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: self.prompts.word_system.clone() },
        ChatMessageReq { role: "user".into(), content: user },
      ],
      max_tokens: WORD_MAX_TOKENS,
      response_format: Some(ResponseFormat { r#type: "json_object".into() }),
    };

    match self.post_chat(&req).await {
      Ok(body) => parse_word_choices(body),
      Err(e) => {
        error!(target: "wordkit", %category, error = %e, "Word generation call failed");
        Vec::new()
      }
    }
  }

  /// Generate a free-text hint for the given prompt.
  ///
  /// Returns the trimmed first choice, or None when the call fails, the
  /// envelope is malformed, or the response carries no usable text.
  #[instrument(level = "info", skip(self, prompt), fields(prompt_len = prompt.len(), model = %self.model))]
  pub async fn generate_hint(&self, prompt: &str) -> Option<String> {
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: self.prompts.hint_system.clone() },
        ChatMessageReq { role: "user".into(), content: prompt.into() },
      ],
      max_tokens: HINT_MAX_TOKENS,
      response_format: None,
    };

    match self.post_chat(&req).await {
      Ok(body) => {
        let text = body
          .choices
          .first()
          .and_then(|c| c.message.content.as_deref())
          .map(|s| s.trim().to_string())
          .filter(|s| !s.is_empty());
        if text.is_none() {
          warn!(target: "wordkit", "Hint response carried no text");
        }
        text
      }
      Err(e) => {
        error!(target: "wordkit", error = %e, "Hint generation call failed");
        None
      }
    }
  }

  /// POST one chat-completions request and decode the envelope.
  async fn post_chat(&self, req: &ChatCompletionRequest) -> Result<ChatCompletionResponse, String> {
    let url = format!("{}/chat/completions", self.base_url);
    let res = self.client.post(&url)
      .header(USER_AGENT, "wordkit/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(req).send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_openai_error(&body).unwrap_or(body);
      return Err(format!("OpenAI HTTP {}: {}", status, msg));
    }

    let body: ChatCompletionResponse = res.json().await.map_err(|e| e.to_string())?;
    if let Some(usage) = &body.usage {
      info!(prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "OpenAI usage");
    }
    Ok(body)
  }
}

/// Second-stage parse: each choice's content must itself be a JSON object
/// `{"word": ..., "difficulty": ...}`. Malformed or empty entries are dropped;
/// the rest of the envelope is still considered.
fn parse_word_choices(body: ChatCompletionResponse) -> Vec<WordChoice> {
  let mut out = Vec::new();
  for choice in &body.choices {
    let Some(content) = choice.message.content.as_deref() else {
      warn!(target: "wordkit", "Dropping choice without content");
      continue;
    };
    match serde_json::from_str::<WordPayload>(content) {
      Ok(payload) if !payload.word.trim().is_empty() => {
        out.push(WordChoice {
          word: payload.word,
          difficulty: WordDifficulty::parse(&payload.difficulty),
        });
      }
      Ok(_) => {
        warn!(target: "wordkit", "Dropping choice with empty word");
      }
      Err(e) => {
        warn!(target: "wordkit", error = %e, "Dropping choice with malformed word payload");
      }
    }
  }
  out
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  max_tokens: u32,
  #[serde(skip_serializing_if = "Option::is_none")]
  response_format: Option<ResponseFormat>,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: String }
#[derive(Serialize)]
struct ResponseFormat { #[serde(rename = "type")] r#type: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

/// Inner payload embedded in a word-generation choice.
#[derive(Deserialize)]
struct WordPayload {
  word: String,
  difficulty: String,
}

/// Try to extract a clean error message from an OpenAI error body.
fn extract_openai_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn envelope(json: &str) -> ChatCompletionResponse {
    serde_json::from_str(json).expect("envelope")
  }

  #[test]
  fn malformed_choices_are_dropped_not_fatal() {
    let body = envelope(
      r#"{"choices":[
        {"message":{"role":"assistant","content":"{\"word\":\"tiger\",\"difficulty\":\"EASY\"}"},"finish_reason":"stop"},
        {"message":{"role":"assistant","content":"not json at all"},"finish_reason":"stop"},
        {"message":{"role":"assistant","content":null},"finish_reason":"stop"},
        {"message":{"role":"assistant","content":"{\"word\":\"\",\"difficulty\":\"hard\"}"},"finish_reason":"stop"},
        {"message":{"role":"assistant","content":"{\"word\":\"glacier\",\"difficulty\":\"impossible\"}"},"finish_reason":null}
      ]}"#,
    );
    let words = parse_word_choices(body);
    assert_eq!(words.len(), 2);
    assert_eq!(words[0], WordChoice { word: "tiger".into(), difficulty: WordDifficulty::Easy });
    assert_eq!(words[1], WordChoice { word: "glacier".into(), difficulty: WordDifficulty::Medium });
  }

  #[test]
  fn empty_choice_list_yields_nothing() {
    let words = parse_word_choices(envelope(r#"{"choices":[]}"#));
    assert!(words.is_empty());
  }

  #[test]
  fn usage_block_is_optional() {
    let body = envelope(
      r#"{"choices":[{"message":{"role":"assistant","content":"{\"word\":\"waffle\",\"difficulty\":\"medium\"}"}}],
          "usage":{"prompt_tokens":12,"completion_tokens":8,"total_tokens":20}}"#,
    );
    assert_eq!(parse_word_choices(body).len(), 1);
  }

  #[test]
  fn openai_error_body_is_extracted() {
    let body = r#"{"error":{"message":"invalid api key","type":"auth"}}"#;
    assert_eq!(extract_openai_error(body).as_deref(), Some("invalid api key"));
    assert!(extract_openai_error("plain text").is_none());
  }
}
