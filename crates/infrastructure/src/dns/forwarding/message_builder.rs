//! DNS Message Builder
//!
//! Constructs TXT query messages in wire format using `hickory-proto`.

use ferrous_locator_domain::LocatorError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive TXT query for `fqdn`.
    ///
    /// Returns the random message ID together with the serialized bytes so
    /// the caller can match the response.
    pub fn build_txt_query(fqdn: &str) -> Result<(u16, Vec<u8>), LocatorError> {
        let name = Name::from_str(fqdn).map_err(|e| {
            LocatorError::InvalidDomainName(format!("Invalid domain '{}': {}", fqdn, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::TXT);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, LocatorError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            LocatorError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
