/// Which ledger store adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// One JSON file holding the whole ledger (default)
    #[default]
    Json,
    /// One JSON document per line in a directory
    Documents,
    /// Remote document collection over HTTP
    Remote,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(StoreBackend::Json),
            "documents" | "docs" => Ok(StoreBackend::Documents),
            "remote" | "http" => Ok(StoreBackend::Remote),
            _ => Err(format!(
                "Invalid store: {}. Please specify 'json', 'documents' or 'remote'",
                s
            )),
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Json => write!(f, "json"),
            StoreBackend::Documents => write!(f, "documents"),
            StoreBackend::Remote => write!(f, "remote"),
        }
    }
}
