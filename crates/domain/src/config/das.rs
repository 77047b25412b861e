use crate::lookup_config::{LookupConfig, DEFAULT_SERVER_ADDRESS, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `[das]` section: which server to ask and how long to wait.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DasConfig {
    #[serde(default = "default_server_address")]
    pub server_address: String,

    /// Receive timeout in milliseconds; 0 selects the 5 second default.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl DasConfig {
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig::new(
            self.server_address.clone(),
            Duration::from_millis(self.timeout_ms),
        )
    }
}

impl Default for DasConfig {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_server_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}
