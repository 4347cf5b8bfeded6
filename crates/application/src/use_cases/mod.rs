pub mod locator;

pub use locator::{LocatorSnapshot, LookupTicket, ServiceLocator};
