//! Prompt configuration (built-in defaults + optional TOML overrides).
//!
//! `WORDKIT_CONFIG_PATH` may point to a TOML file with a `[prompts]` table.
//! A missing or unparsable file falls back to the built-in Pictionary prompts.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct WordKitConfig {
  #[serde(default)]
  pub prompts: Prompts,
}

/// Prompts used by the OpenAI client. Defaults match the game's stock
/// Pictionary instructions; override them in TOML to tune tone or language.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  // Word generation (strict JSON response)
  pub word_system: String,
  pub word_user_template: String,
  // Hint generation (plain text response)
  pub hint_system: String,
  pub hint_user_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      word_system: "You are a helpful assistant for generating Pictionary words.\nAlways respond in JSON format with the following structure:\n{\"word\": \"example\", \"difficulty\": \"easy\"}\nDifficulty must be one of: easy, medium, hard".into(),
      word_user_template: "Generate a word from the category '{category}' for a Pictionary game.".into(),
      hint_system: "You are a helpful assistant for generating Pictionary hints.\nRespond with a short, clear hint that doesn't directly give away the word.".into(),
      hint_user_template: "Provide a hint for the word '{word}' in the context of the category '{category}'.".into(),
    }
  }
}

impl Prompts {
  /// Prompts from WORDKIT_CONFIG_PATH if set and parsable, otherwise defaults.
  pub fn load() -> Self {
    load_config_from_env().map(|c| c.prompts).unwrap_or_default()
  }
}

/// Attempt to load `WordKitConfig` from WORDKIT_CONFIG_PATH.
/// On any IO/parsing error, returns None.
pub fn load_config_from_env() -> Option<WordKitConfig> {
  let path = std::env::var("WORDKIT_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<WordKitConfig>(&s) {
      Ok(cfg) => {
        info!(target: "wordkit", %path, "Loaded wordkit config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "wordkit", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "wordkit", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub(crate) fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_templates_fill_cleanly() {
    let prompts = Prompts::default();
    let user = fill_template(&prompts.word_user_template, &[("category", "Animals")]);
    assert_eq!(user, "Generate a word from the category 'Animals' for a Pictionary game.");

    let hint = fill_template(
      &prompts.hint_user_template,
      &[("word", "tiger"), ("category", "Animals")],
    );
    assert_eq!(hint, "Provide a hint for the word 'tiger' in the context of the category 'Animals'.");
  }

  #[test]
  fn toml_overrides_parse() {
    let toml_src = r#"
      [prompts]
      word_system = "sys"
      word_user_template = "word for {category}"
      hint_system = "hints"
      hint_user_template = "hint for {word}"
    "#;
    let cfg: WordKitConfig = toml::from_str(toml_src).unwrap();
    assert_eq!(cfg.prompts.word_system, "sys");
    assert_eq!(fill_template(&cfg.prompts.word_user_template, &[("category", "Food")]), "word for Food");
  }

  #[test]
  fn missing_prompts_table_uses_defaults() {
    let cfg: WordKitConfig = toml::from_str("").unwrap();
    assert_eq!(cfg.prompts.word_system, Prompts::default().word_system);
  }
}
