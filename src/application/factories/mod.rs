mod exporter_factory;
mod presenter_factory;
mod store_factory;
mod view_formatter_factory;

pub use exporter_factory::ExporterFactory;
pub use presenter_factory::{OutputDestination, PresenterFactory};
pub use store_factory::{StoreFactory, StoreSettings};
pub use view_formatter_factory::ViewFormatterFactory;
