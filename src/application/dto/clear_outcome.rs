/// ClearOutcome - Result of a bulk-clear request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The store was emptied. The count is unknown when the old ledger
    /// could not be read.
    Cleared { lines_removed: Option<usize> },
    /// The user declined; the store is untouched
    Aborted,
}
