use crate::shared::Result;

/// ConfirmationPrompt port for asking the user before destructive operations
pub trait ConfirmationPrompt {
    /// Asks a yes/no question. Returns `true` only on an explicit yes.
    fn confirm(&self, question: &str) -> Result<bool>;
}
