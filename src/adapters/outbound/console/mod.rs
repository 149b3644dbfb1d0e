/// Console adapters for progress output and interactive prompts
mod confirmation_prompt;
mod progress_reporter;

pub use confirmation_prompt::StdinConfirmationPrompt;
pub use progress_reporter::StderrProgressReporter;
