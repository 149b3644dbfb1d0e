/// Output format for the query commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFormat {
    /// Human-readable tables (default)
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ViewFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ViewFormat::Text),
            "json" => Ok(ViewFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ViewFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewFormat::Text => write!(f, "text"),
            ViewFormat::Json => write!(f, "json"),
        }
    }
}
