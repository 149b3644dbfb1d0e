use crate::ledger::domain::Ledger;
use crate::shared::Result;
use std::sync::Arc;

/// LedgerStore port for persisting the ledger
///
/// Every save overwrites what the store held. There is no conflict
/// resolution between concurrent writers.
pub trait LedgerStore {
    /// Loads the stored ledger. An empty or missing store yields an empty ledger.
    fn load(&self) -> Result<Ledger>;

    /// Overwrites the stored ledger
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Removes every stored line
    fn clear(&self) -> Result<()>;

    /// Human-readable location of the store, used in messages
    fn location(&self) -> String;
}

/// Store handle shared between the CLI and the HTTP service
pub type SharedLedgerStore = Arc<dyn LedgerStore + Send + Sync>;

impl<S: LedgerStore + ?Sized> LedgerStore for Arc<S> {
    fn load(&self) -> Result<Ledger> {
        (**self).load()
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        (**self).save(ledger)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Box<S> {
    fn load(&self) -> Result<Ledger> {
        (**self).load()
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        (**self).save(ledger)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
