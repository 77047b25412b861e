use std::io;
use std::time::Duration;
use thiserror::Error;

/// Failures of the request/reply exchange.
///
/// An unclassifiable reply is not an error; it is a successful lookup with
/// [`DomainStatus::Error`](crate::DomainStatus::Error).
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Failed to resolve DAS server address {server}")]
    AddressResolution {
        server: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open UDP session to {server}")]
    TransportOpen {
        server: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to send request to {server}")]
    Send {
        server: String,
        #[source]
        source: io::Error,
    },

    #[error("Timeout waiting for reply from {server} after {}ms", .timeout.as_millis())]
    ReceiveTimeout { server: String, timeout: Duration },

    #[error("Failed to receive reply from {server}")]
    Receive {
        server: String,
        #[source]
        source: io::Error,
    },
}

impl LookupError {
    pub fn server(&self) -> &str {
        match self {
            Self::AddressResolution { server, .. }
            | Self::TransportOpen { server, .. }
            | Self::Send { server, .. }
            | Self::ReceiveTimeout { server, .. }
            | Self::Receive { server, .. } => server,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ReceiveTimeout { .. })
    }
}
