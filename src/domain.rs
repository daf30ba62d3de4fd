//! Domain models: words, categories, and difficulty levels.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Literal returned wherever a hint was requested but none exists.
pub const NO_HINT_AVAILABLE: &str = "No hint available";

/// Topic bucket a word is drawn from. Closed set; the label doubles as the
/// display string and as the parameter embedded in the generation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCategory {
  Animals,
  Food,
  Sports,
  Movies,
  Objects,
  Actions,
  Places,
  Nature,
}

impl WordCategory {
  pub const ALL: [WordCategory; 8] = [
    WordCategory::Animals,
    WordCategory::Food,
    WordCategory::Sports,
    WordCategory::Movies,
    WordCategory::Objects,
    WordCategory::Actions,
    WordCategory::Places,
    WordCategory::Nature,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      WordCategory::Animals => "Animals",
      WordCategory::Food => "Food",
      WordCategory::Sports => "Sports",
      WordCategory::Movies => "Movies",
      WordCategory::Objects => "Objects",
      WordCategory::Actions => "Actions",
      WordCategory::Places => "Places",
      WordCategory::Nature => "Nature",
    }
  }
}

impl std::fmt::Display for WordCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

/// Three-level difficulty attached to every word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordDifficulty {
  Easy,
  Medium,
  Hard,
}

impl Default for WordDifficulty {
  fn default() -> Self { WordDifficulty::Medium }
}

impl WordDifficulty {
  /// Case-insensitive parse of a remote difficulty label.
  /// Anything outside the three-level set maps to Medium.
  pub fn parse(s: &str) -> Self {
    match s.trim().to_lowercase().as_str() {
      "easy" => WordDifficulty::Easy,
      "medium" => WordDifficulty::Medium,
      "hard" => WordDifficulty::Hard,
      _ => WordDifficulty::Medium,
    }
  }
}

/// One playable word. Immutable once constructed; enriching a word with a
/// hint produces a new value via [`Word::with_hint`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Word {
  pub id: String,
  pub value: String,
  pub category: WordCategory,
  pub difficulty: WordDifficulty,
  #[serde(default)]
  pub hint: Option<String>,
}

impl Word {
  pub fn new(value: impl Into<String>, category: WordCategory, difficulty: WordDifficulty) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      value: value.into(),
      category,
      difficulty,
      hint: None,
    }
  }

  /// Derive a copy of this word carrying the given hint.
  pub fn with_hint(&self, hint: impl Into<String>) -> Self {
    Self { hint: Some(hint.into()), ..self.clone() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn difficulty_parse_is_case_insensitive() {
    assert_eq!(WordDifficulty::parse("easy"), WordDifficulty::Easy);
    assert_eq!(WordDifficulty::parse("Easy"), WordDifficulty::Easy);
    assert_eq!(WordDifficulty::parse("EASY"), WordDifficulty::Easy);
    assert_eq!(WordDifficulty::parse("hard"), WordDifficulty::Hard);
  }

  #[test]
  fn unknown_difficulty_defaults_to_medium() {
    assert_eq!(WordDifficulty::parse("impossible"), WordDifficulty::Medium);
    assert_eq!(WordDifficulty::parse(""), WordDifficulty::Medium);
    assert_eq!(WordDifficulty::parse("  medium "), WordDifficulty::Medium);
  }

  #[test]
  fn with_hint_derives_a_new_value() {
    let word = Word::new("elephant", WordCategory::Animals, WordDifficulty::Medium);
    assert!(word.hint.is_none());

    let hinted = word.with_hint("Large gray mammal");
    assert_eq!(hinted.hint.as_deref(), Some("Large gray mammal"));
    assert_eq!(hinted.value, "elephant");
    assert_eq!(hinted.id, word.id);
    // The original is untouched.
    assert!(word.hint.is_none());
  }

  #[test]
  fn category_labels_round_trip_through_serde() {
    for cat in WordCategory::ALL {
      let json = serde_json::to_string(&cat).unwrap();
      assert_eq!(json, format!("\"{}\"", cat.label()));
      let back: WordCategory = serde_json::from_str(&json).unwrap();
      assert_eq!(back, cat);
    }
  }
}
