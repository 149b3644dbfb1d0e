use crate::ports::outbound::ConfirmationPrompt;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// StdinConfirmationPrompt asks on stderr and reads the answer from stdin
pub struct StdinConfirmationPrompt;

impl StdinConfirmationPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinConfirmationPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationPrompt for StdinConfirmationPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        eprint!("{} [y/N] ", question);
        io::stderr().flush().context("Failed to write prompt")?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read confirmation from stdin")?;

        Ok(is_yes(&answer))
    }
}

/// End of input or anything other than y/yes counts as a no
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("YES"));
        assert!(is_yes("  yes  "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yess"));
    }
}
