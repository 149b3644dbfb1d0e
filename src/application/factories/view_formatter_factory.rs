use crate::adapters::outbound::formatters::{JsonViewFormatter, TextViewFormatter};
use crate::application::dto::ViewFormat;
use crate::ports::outbound::ViewFormatter;

/// Factory for creating view formatters
pub struct ViewFormatterFactory;

impl ViewFormatterFactory {
    /// Creates a formatter for the specified view format. `colored` only
    /// affects the text formatter.
    pub fn create(format: ViewFormat, colored: bool) -> Box<dyn ViewFormatter> {
        match format {
            ViewFormat::Text => Box::new(TextViewFormatter::new(colored)),
            ViewFormat::Json => Box::new(JsonViewFormatter::new()),
        }
    }
}
