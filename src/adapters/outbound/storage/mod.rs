/// Ledger store adapters and the document shape they share
mod document_directory_store;
mod http_document_store;
mod json_file_store;
pub mod ledger_document;

pub use document_directory_store::DocumentDirectoryStore;
pub use http_document_store::HttpDocumentStore;
pub use json_file_store::JsonFileStore;
