use super::iris::{RequestBuilder, ResponseParser};
use super::transport::{DasTransport, UdpTransport};
use iris_das_domain::{LookupConfig, LookupError, LookupResult};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Performs domain availability checks over a [`DasTransport`].
pub struct DasClient<T = UdpTransport> {
    transport: T,
}

impl DasClient<UdpTransport> {
    pub fn udp(server: impl Into<String>) -> Self {
        Self::new(UdpTransport::new(server))
    }
}

impl<T: DasTransport> DasClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One request, one reply, classified.
    ///
    /// Transport failures are returned as errors. A reply that cannot be
    /// interpreted is still `Ok`, with [`DomainStatus::Error`].
    ///
    /// [`DomainStatus::Error`]: iris_das_domain::DomainStatus::Error
    pub async fn lookup(
        &self,
        domain: &str,
        timeout: Duration,
    ) -> Result<LookupResult, LookupError> {
        let start = Instant::now();
        let request = RequestBuilder::build(domain);

        debug!(
            server = %self.transport.server(),
            protocol = self.transport.protocol_name(),
            domain = %domain.trim(),
            "Starting DAS lookup"
        );

        let response = self.transport.exchange(request.as_bytes(), timeout).await?;
        let result = ResponseParser::classify(&response.bytes, domain);

        info!(
            server = %self.transport.server(),
            domain = %result.domain_name,
            status = %result.status,
            truncated = response.possibly_truncated,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "DAS lookup completed"
        );

        Ok(result)
    }
}

/// Check `domain` against the DAS server named in `config`.
///
/// Each call opens and releases its own UDP socket, so concurrent calls do
/// not share any state.
pub async fn lookup(config: &LookupConfig, domain: &str) -> Result<LookupResult, LookupError> {
    DasClient::udp(config.server_address.clone())
        .lookup(domain, config.timeout)
        .await
}
