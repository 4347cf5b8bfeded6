mod service_locator;
mod snapshot;

pub use service_locator::{LookupTicket, ServiceLocator};
pub use snapshot::LocatorSnapshot;
