use crate::ledger::domain::{Ledger, LineRecord, LineStatus, ServiceNumber};

/// Maximum length of a search term
const MAX_SEARCH_LENGTH: usize = 64;

/// LineFilter selects lines by service-number substring and status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFilter {
    search: Option<String>,
    status: Option<LineStatus>,
}

impl LineFilter {
    pub fn new(search: Option<String>, status: Option<LineStatus>) -> Self {
        let search = search
            .map(|s| s.trim().chars().take(MAX_SEARCH_LENGTH).collect::<String>())
            .filter(|s| !s.is_empty());

        Self { search, status }
    }

    /// Filter that keeps every line
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, service_number: &ServiceNumber, line: &LineRecord) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .map_or(true, |term| service_number.as_str().contains(term));
        let status_ok = self.status.map_or(true, |status| line.status() == status);

        search_ok && status_ok
    }

    pub fn apply<'a>(&self, ledger: &'a Ledger) -> Vec<(&'a ServiceNumber, &'a LineRecord)> {
        ledger
            .lines()
            .filter(|(number, line)| self.matches(number, line))
            .collect()
    }
}
