/// Type alias for Result with anyhow::Error as the error type.
/// Used by every layer so errors from different sources compose with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
