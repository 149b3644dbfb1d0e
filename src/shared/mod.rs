//! Shared utilities used across layers
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
