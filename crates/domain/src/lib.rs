//! Ferrous Locator Domain Layer
pub mod config;
pub mod errors;
pub mod lookup_status;
pub mod module_path;
pub mod service_interface;
pub mod txt_record;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::LocatorError;
pub use lookup_status::LookupStatus;
pub use module_path::ModulePathEntry;
pub use service_interface::ServiceInterfaceName;
pub use txt_record::TxtRecord;
