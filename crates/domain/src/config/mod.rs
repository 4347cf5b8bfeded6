pub mod errors;
pub mod locator;
pub mod logging;
pub mod refresh;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use locator::LocatorConfig;
pub use logging::LoggingConfig;
pub use refresh::RefreshConfig;
pub use resolver::{ResolverConfig, ResolverProtocol};
pub use root::{CliOverrides, Config};
