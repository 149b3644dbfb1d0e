/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod clear_outcome;
mod export_format;
mod import_request;
mod import_response;
mod restore_response;
mod store_backend;
mod view_format;

pub use clear_outcome::ClearOutcome;
pub use export_format::ExportFormat;
pub use import_request::ImportRequest;
pub use import_response::ImportResponse;
pub use restore_response::RestoreResponse;
pub use store_backend::StoreBackend;
pub use view_format::ViewFormat;
