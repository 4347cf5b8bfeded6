use ferrous_locator_domain::{LocatorError, TxtRecord};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TxtResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub records: Vec<TxtRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire response and keeps the TXT answers. Other record types
    /// in the answer section (CNAME hops, for instance) are ignored.
    pub fn parse(response_bytes: &[u8]) -> Result<TxtResponse, LocatorError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            LocatorError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let mut records = Vec::new();
        for record in message.answers() {
            if let RData::TXT(txt) = record.data() {
                let strings = txt
                    .txt_data()
                    .iter()
                    .map(|data| String::from_utf8_lossy(data).into_owned())
                    .collect();
                records.push(TxtRecord::new(
                    Duration::from_secs(u64::from(record.ttl())),
                    strings,
                ));
            }
        }

        let response = TxtResponse {
            id: message.id(),
            rcode: message.response_code(),
            truncated: message.truncated(),
            records,
        };

        debug!(
            rcode = ?response.rcode,
            truncated = response.truncated,
            txt_records = response.records.len(),
            "DNS response parsed"
        );

        Ok(response)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
