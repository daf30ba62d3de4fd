//! Word supply: the `WordProvider` seam and its OpenAI-backed implementation.
//!
//! Retry policy lives here, not in the client: the single-word path burns up
//! to three attempts before falling back to a sentinel word. Deduplication is
//! the controller's job, not ours.

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::domain::{Word, WordCategory, WordDifficulty};
use crate::hint::WordHintGenerator;
use crate::openai::OpenAIClient;

/// Value of the sentinel word returned when every generation attempt fails.
/// Callers must treat it as valid-but-meaningless, never as an error.
pub const FALLBACK_WORD: &str = "fallback";

const WORD_ATTEMPTS: usize = 3;

/// Something that supplies playable words.
#[async_trait]
pub trait WordProvider: Send + Sync {
  async fn get_random_word(&self, category: WordCategory) -> Word;
  async fn get_word_batch(&self, category: WordCategory, count: usize) -> Vec<Word>;
}

/// OpenAI-backed provider: a word client plus a hint generator sharing it.
pub struct AiWordProvider {
  client: OpenAIClient,
  hints: WordHintGenerator,
}

impl AiWordProvider {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self::with_client(OpenAIClient::new(api_key))
  }

  pub fn with_client(client: OpenAIClient) -> Self {
    let hints = WordHintGenerator::with_client(client.clone());
    Self { client, hints }
  }
}

#[async_trait]
impl WordProvider for AiWordProvider {
  /// Try up to three times to get a structured word, enrich the first success
  /// with a hint, and fall back to the sentinel word once the budget is spent.
  #[instrument(level = "info", skip(self), fields(category = category.label()))]
  async fn get_random_word(&self, category: WordCategory) -> Word {
    for attempt in 1..=WORD_ATTEMPTS {
      if let Some(choice) = self.client.generate_word(category.label()).await {
        let word = Word::new(choice.word, category, choice.difficulty);
        let hint = self.hints.generate_hint(&word).await;
        return word.with_hint(hint);
      }
      warn!(target: "wordkit", attempt, "Word generation attempt yielded nothing");
    }

    warn!(
      target: "wordkit",
      category = category.label(),
      attempts = WORD_ATTEMPTS,
      "All word generation attempts failed; returning fallback word"
    );
    Word::new(FALLBACK_WORD, category, WordDifficulty::Medium)
  }

  /// One batch call, then sequential hint enrichment. No retry at this level;
  /// the remote service may return fewer items than requested.
  #[instrument(level = "info", skip(self), fields(category = category.label(), count))]
  async fn get_word_batch(&self, category: WordCategory, count: usize) -> Vec<Word> {
    let choices = self.client.generate_words(category.label(), count).await;

    let mut words = Vec::with_capacity(choices.len());
    for choice in choices {
      let word = Word::new(choice.word, category, choice.difficulty);
      let hint = self.hints.generate_hint(&word).await;
      words.push(word.with_hint(hint));
    }
    words
  }
}
