//! Session-scoped record of word values already issued.
//!
//! One `UsedWords` belongs to one controller. The set grows until `reset`;
//! there is no eviction. All access goes through a single lock so concurrent
//! callers cannot corrupt it, and `try_claim` gives the atomic
//! check-then-insert the controller needs.

use std::collections::HashSet;

use tokio::sync::RwLock;

#[derive(Default)]
pub struct UsedWords {
  inner: RwLock<HashSet<String>>,
}

impl UsedWords {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn is_used(&self, value: &str) -> bool {
    self.inner.read().await.contains(value)
  }

  /// Idempotent insertion.
  pub async fn mark_used(&self, value: &str) {
    self.inner.write().await.insert(value.to_string());
  }

  /// Atomically mark `value` used. Returns true if this caller won the claim,
  /// false if the value was already issued this session.
  pub async fn try_claim(&self, value: &str) -> bool {
    self.inner.write().await.insert(value.to_string())
  }

  /// Clear all tracked values, beginning a new session.
  pub async fn reset(&self) {
    self.inner.write().await.clear();
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;

  #[tokio::test]
  async fn mark_and_reset() {
    let used = UsedWords::new();
    assert!(!used.is_used("tiger").await);

    used.mark_used("tiger").await;
    used.mark_used("tiger").await; // idempotent
    assert!(used.is_used("tiger").await);

    used.reset().await;
    assert!(!used.is_used("tiger").await);
  }

  #[tokio::test]
  async fn try_claim_reports_first_winner() {
    let used = UsedWords::new();
    assert!(used.try_claim("tiger").await);
    assert!(!used.try_claim("tiger").await);
    assert!(used.is_used("tiger").await);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn concurrent_claims_have_exactly_one_winner() {
    let used = Arc::new(UsedWords::new());

    let mut handles = Vec::new();
    for _ in 0..16 {
      let used = used.clone();
      handles.push(tokio::spawn(async move { used.try_claim("tiger").await }));
    }

    let mut winners = 0;
    for h in handles {
      if h.await.unwrap() {
        winners += 1;
      }
    }
    assert_eq!(winners, 1);
  }
}
