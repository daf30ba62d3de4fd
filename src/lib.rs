//! wordkit · AI word-and-hint content for Pictionary-style games
//!
//! - Words and hints come from the OpenAI chat-completions API
//! - Single-word generation retries a fixed number of times, then falls back
//!   to a sentinel word instead of erroring
//! - A per-controller session tracks already-issued words so a game never
//!   repeats one until the session is reset
//!
//! Relevant env variables:
//!   OPENAI_API_KEY      : enables `OpenAIClient::from_env`
//!   OPENAI_BASE_URL     : default "https://api.openai.com/v1"
//!   OPENAI_MODEL        : default "gpt-4o-mini"
//!   WORDKIT_CONFIG_PATH : path to TOML config overriding the prompts
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"
//!
//! Typical use:
//!
//! ```no_run
//! use wordkit::{WordCategory, WordGameController};
//!
//! # async fn play() {
//! let controller = WordGameController::new("sk-...");
//! let word = controller.next_word(WordCategory::Animals).await;
//! println!("Draw: {} (hint: {})", word.value, controller.get_hint(&word));
//! # }
//! ```

mod config;
mod controller;
mod domain;
mod hint;
mod openai;
mod provider;
mod session;
pub mod telemetry;

pub use config::{load_config_from_env, Prompts, WordKitConfig};
pub use controller::WordGameController;
pub use domain::{Word, WordCategory, WordDifficulty, NO_HINT_AVAILABLE};
pub use hint::WordHintGenerator;
pub use openai::{OpenAIClient, WordChoice};
pub use provider::{AiWordProvider, WordProvider, FALLBACK_WORD};
pub use session::UsedWords;
