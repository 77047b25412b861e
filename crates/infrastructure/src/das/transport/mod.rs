pub mod resolver;
pub mod udp;

use async_trait::async_trait;
use iris_das_domain::LookupError;
use std::time::Duration;

pub use udp::{UdpTransport, MAX_REPLY_SIZE};

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    /// The reply filled the whole receive buffer and may have been cut off.
    pub possibly_truncated: bool,
}

/// One request datagram out, one reply datagram back.
#[async_trait]
pub trait DasTransport: Send + Sync {
    async fn exchange(
        &self,
        request: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, LookupError>;

    /// Address the transport talks to, as configured.
    fn server(&self) -> &str;

    fn protocol_name(&self) -> &'static str;
}
