use std::time::Duration;

/// One TXT answer as delivered by a resolver: its TTL and the character
/// strings it carries, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    pub ttl: Duration,
    pub strings: Vec<String>,
}

impl TxtRecord {
    pub fn new(ttl: Duration, strings: Vec<String>) -> Self {
        Self { ttl, strings }
    }

    /// Record holding a single presentation-format string such as
    /// `"txtvers=1" "authn=/authn"`.
    pub fn from_text(ttl: Duration, text: impl Into<String>) -> Self {
        Self {
            ttl,
            strings: vec![text.into()],
        }
    }
}
