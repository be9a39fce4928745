//! Trait seams owned by the presentation layer.

use async_trait::async_trait;

/// Outcome of a confirm dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    Confirmed,
    Declined,
}

/// Two-outcome async handoff for destructive operations.
///
/// The UI owns the dialog; the engine only awaits the decision. Modeling the
/// handoff as a single awaited call means repeated opens cannot accumulate
/// stale handlers.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Present `title`/`text` to the operator and resolve once they decide.
    async fn confirm(&self, title: &str, text: &str) -> ConfirmDecision;
}
