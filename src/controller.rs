//! Game orchestration: hand out unused words, look up hints, reset sessions.

use tracing::{debug, instrument};

use crate::domain::{Word, WordCategory, NO_HINT_AVAILABLE};
use crate::provider::{AiWordProvider, WordProvider};
use crate::session::UsedWords;

pub struct WordGameController {
  provider: Box<dyn WordProvider>,
  used_words: UsedWords,
}

impl WordGameController {
  /// Controller backed by the OpenAI provider.
  pub fn new(api_key: impl Into<String>) -> Self {
    Self::with_provider(Box::new(AiWordProvider::new(api_key)))
  }

  /// Controller backed by any word supply (e.g. a deterministic test double).
  pub fn with_provider(provider: Box<dyn WordProvider>) -> Self {
    Self { provider, used_words: UsedWords::new() }
  }

  /// Generate words until one has not been issued this session, claim it, and
  /// return it.
  ///
  /// The loop has no iteration cap: a provider that forever returns values
  /// this session has already claimed keeps the call pending forever. That
  /// includes the sentinel fallback word once it has been issued.
  #[instrument(level = "info", skip(self), fields(category = category.label()))]
  pub async fn next_word(&self, category: WordCategory) -> Word {
    loop {
      let word = self.provider.get_random_word(category).await;
      if self.used_words.try_claim(&word.value).await {
        return word;
      }
      debug!(target: "wordkit", "Word already issued this session; regenerating");
    }
  }

  /// Pure lookup of the hint carried by a word. Never calls the remote
  /// service.
  pub fn get_hint(&self, word: &Word) -> String {
    word.hint.clone().unwrap_or_else(|| NO_HINT_AVAILABLE.to_string())
  }

  pub async fn reset_used_words(&self) {
    self.used_words.reset().await;
  }
}
