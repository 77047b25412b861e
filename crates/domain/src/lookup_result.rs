use crate::DomainStatus;
use serde::{Deserialize, Serialize};

/// Outcome of a single DAS lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Name echoed by the server, or the requested name when the reply
    /// carries none.
    pub domain_name: String,

    pub status: DomainStatus,

    /// Verbatim text of the received datagram.
    pub raw_reply: String,
}

impl LookupResult {
    pub fn new(
        domain_name: impl Into<String>,
        status: DomainStatus,
        raw_reply: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            status,
            raw_reply: raw_reply.into(),
        }
    }

    /// Result for a reply that could not be interpreted.
    pub fn unclassified(requested: impl Into<String>, raw_reply: impl Into<String>) -> Self {
        Self::new(requested, DomainStatus::Error, raw_reply)
    }

    pub fn is_error(&self) -> bool {
        self.status == DomainStatus::Error
    }
}
