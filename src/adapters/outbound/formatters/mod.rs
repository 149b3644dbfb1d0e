/// Formatter adapters for the query views
mod currency;
mod json_view_formatter;
mod text_view_formatter;

pub use currency::format_currency;
pub use json_view_formatter::JsonViewFormatter;
pub use text_view_formatter::TextViewFormatter;
