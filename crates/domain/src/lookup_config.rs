use std::time::Duration;

/// Public DAS service for the `.fi` ccTLD.
pub const DEFAULT_SERVER_ADDRESS: &str = "das.domain.fi:715";

/// Applied whenever a lookup is given a zero timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how long to ask, supplied per lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// `host:port` of the DAS UDP endpoint.
    pub server_address: String,

    pub timeout: Duration,
}

impl LookupConfig {
    pub fn new(server_address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            server_address: server_address.into(),
            timeout,
        }
    }

    /// Timeout actually used for the receive wait.
    pub fn effective_timeout(&self) -> Duration {
        effective_timeout(self.timeout)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_ADDRESS, DEFAULT_TIMEOUT)
    }
}

pub fn effective_timeout(timeout: Duration) -> Duration {
    if timeout.is_zero() {
        DEFAULT_TIMEOUT
    } else {
        timeout
    }
}
