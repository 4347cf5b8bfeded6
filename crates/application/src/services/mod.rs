pub mod endpoint_cache;
pub mod endpoint_url;
pub mod txt_record_parser;

pub use endpoint_cache::EndpointCache;
pub use endpoint_url::{EndpointUrlBuilder, ENDPOINT_PORT, ENDPOINT_SCHEME};
pub use txt_record_parser::TxtRecordParser;
