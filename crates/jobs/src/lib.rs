pub mod locator_refresh;
pub mod runner;

pub use locator_refresh::LocatorRefreshJob;
pub use runner::JobRunner;
