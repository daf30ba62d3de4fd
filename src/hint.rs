//! Hint generation: one prompt per word, no retry, no caching.

use tracing::instrument;

use crate::config::fill_template;
use crate::domain::{Word, NO_HINT_AVAILABLE};
use crate::openai::OpenAIClient;

pub struct WordHintGenerator {
  client: OpenAIClient,
}

impl WordHintGenerator {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self { client: OpenAIClient::new(api_key) }
  }

  /// Reuse an existing client (shares its endpoint and prompts).
  pub fn with_client(client: OpenAIClient) -> Self {
    Self { client }
  }

  /// Ask the model for a hint that does not give the word away.
  /// Yields the no-hint literal when the client comes back empty-handed.
  #[instrument(level = "info", skip(self, word), fields(category = word.category.label()))]
  pub async fn generate_hint(&self, word: &Word) -> String {
    let prompt = fill_template(
      &self.client.prompts().hint_user_template,
      &[("word", &word.value), ("category", word.category.label())],
    );

    match self.client.generate_hint(&prompt).await {
      Some(hint) => hint,
      None => NO_HINT_AVAILABLE.to_string(),
    }
  }
}
