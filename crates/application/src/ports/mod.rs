mod txt_resolver;

pub use txt_resolver::TxtResolver;
