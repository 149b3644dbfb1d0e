use super::CLEAR_CONFIRMATION_QUESTION;
use crate::application::dto::ClearOutcome;
use crate::ports::outbound::{ConfirmationPrompt, LedgerStore, ProgressReporter};
use crate::shared::Result;

/// ClearLedgerUseCase empties the store after an explicit confirmation
pub struct ClearLedgerUseCase<S, C, P> {
    ledger_store: S,
    confirmation_prompt: C,
    progress_reporter: P,
}

impl<S, C, P> ClearLedgerUseCase<S, C, P>
where
    S: LedgerStore,
    C: ConfirmationPrompt,
    P: ProgressReporter,
{
    pub fn new(ledger_store: S, confirmation_prompt: C, progress_reporter: P) -> Self {
        Self {
            ledger_store,
            confirmation_prompt,
            progress_reporter,
        }
    }

    /// Clears the store. With `assume_yes` the prompt is skipped.
    pub fn execute(&self, assume_yes: bool) -> Result<ClearOutcome> {
        if !assume_yes && !self.confirmation_prompt.confirm(CLEAR_CONFIRMATION_QUESTION)? {
            self.progress_reporter.report("Aborted. Nothing was cleared.");
            return Ok(ClearOutcome::Aborted);
        }

        // The count is informational; a corrupt store must still be clearable
        let lines_removed = match self.ledger_store.load() {
            Ok(ledger) => Some(ledger.len()),
            Err(e) => {
                log::warn!("Could not read {} before clearing: {}", self.ledger_store.location(), e);
                None
            }
        };

        self.ledger_store.clear()?;

        let message = match lines_removed {
            Some(count) => format!(
                "🗑️  Cleared {} line(s) from {}",
                count,
                self.ledger_store.location()
            ),
            None => format!("🗑️  Cleared {}", self.ledger_store.location()),
        };
        self.progress_reporter.report_completion(&message);

        Ok(ClearOutcome::Cleared { lines_removed })
    }
}
