/// Adapters layer - Concrete implementations of ports
///
/// Inbound adapters drive the application (the HTTP service); outbound
/// adapters are driven by it (stores, readers, exporters, console).
pub mod inbound;
pub mod outbound;
