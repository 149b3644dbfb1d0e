use commission_ledger::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock LedgerStore keeping the ledger in memory.
///
/// Clones share state, so a test can hand one clone to a use case and
/// inspect the other.
#[derive(Default, Clone)]
pub struct MockLedgerStore {
    ledger: Arc<Mutex<Ledger>>,
    saves: Arc<Mutex<usize>>,
    fail_on_save: bool,
}

impl MockLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            ..Self::default()
        }
    }

    pub fn failing_on_save() -> Self {
        Self {
            fail_on_save: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Ledger {
        self.ledger.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl LedgerStore for MockLedgerStore {
    fn load(&self) -> Result<Ledger> {
        Ok(self.snapshot())
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        if self.fail_on_save {
            anyhow::bail!("Mock store save failure");
        }
        *self.ledger.lock().unwrap() = ledger.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.ledger.lock().unwrap() = Ledger::new();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
