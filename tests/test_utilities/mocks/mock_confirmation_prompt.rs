use commission_ledger::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ConfirmationPrompt answering with a fixed value
#[derive(Clone)]
pub struct MockConfirmationPrompt {
    answer: bool,
    pub questions: Arc<Mutex<Vec<String>>>,
}

impl MockConfirmationPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

impl ConfirmationPrompt for MockConfirmationPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self.answer)
    }
}
