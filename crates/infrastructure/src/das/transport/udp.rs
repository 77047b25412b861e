//! UDP Transport for IRIS DAS lookups (RFC 5778)
//!
//! The request goes out as a single datagram and the reply is a single
//! datagram; there is no framing, no retransmission and no reassembly.

use super::{resolver, DasTransport, TransportResponse};
use async_trait::async_trait;
use iris_das_domain::lookup_config::effective_timeout;
use iris_das_domain::LookupError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Receive buffer size; longer replies are cut to this length.
pub const MAX_REPLY_SIZE: usize = 2048;

/// DAS over UDP transport
pub struct UdpTransport {
    server: String,
}

impl UdpTransport {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
        }
    }

    fn open_error(&self, source: std::io::Error) -> LookupError {
        LookupError::TransportOpen {
            server: self.server.clone(),
            source,
        }
    }
}

#[async_trait]
impl DasTransport for UdpTransport {
    async fn exchange(
        &self,
        request: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, LookupError> {
        let server_addr = resolver::resolve(&self.server).await?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        // Dropped on every return path below, which releases the port.
        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.open_error(e))?;

        // Only datagrams from the server are accepted as the reply.
        socket
            .connect(server_addr)
            .await
            .map_err(|e| self.open_error(e))?;

        let timeout = effective_timeout(timeout);
        let deadline = Instant::now() + timeout;

        let bytes_sent = socket
            .send(request)
            .await
            .map_err(|source| LookupError::Send {
                server: self.server.clone(),
                source,
            })?;

        debug!(
            server = %self.server,
            resolved = %server_addr,
            bytes_sent = bytes_sent,
            "DAS request sent"
        );

        let mut recv_buf = vec![0u8; MAX_REPLY_SIZE];

        let bytes_received = tokio::time::timeout_at(deadline, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| LookupError::ReceiveTimeout {
                server: self.server.clone(),
                timeout,
            })?
            .map_err(|source| LookupError::Receive {
                server: self.server.clone(),
                source,
            })?;

        recv_buf.truncate(bytes_received);

        let possibly_truncated = bytes_received == MAX_REPLY_SIZE;
        if possibly_truncated {
            warn!(
                server = %self.server,
                limit = MAX_REPLY_SIZE,
                "DAS reply filled the receive buffer and may be truncated"
            );
        }

        debug!(
            server = %self.server,
            bytes_received = bytes_received,
            "DAS reply received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            possibly_truncated,
        })
    }

    fn server(&self) -> &str {
        &self.server
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let transport = UdpTransport::new("das.domain.fi:715");
        assert_eq!(transport.server(), "das.domain.fi:715");
        assert_eq!(transport.protocol_name(), "UDP");
    }

    #[tokio::test]
    async fn test_unresolvable_address_fails_before_sending() {
        let transport = UdpTransport::new("no-port-here");
        let err = transport
            .exchange(b"<request/>", Duration::from_millis(100))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::AddressResolution { .. }));
        assert_eq!(err.server(), "no-port-here");
    }

    #[tokio::test]
    async fn test_echo_round_trip() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            if let Ok((len, peer)) = server.recv_from(&mut buf).await {
                let _ = server.send_to(&buf[..len], peer).await;
            }
        });

        let transport = UdpTransport::new(addr.to_string());
        let response = transport
            .exchange(b"<ping/>", Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(response.bytes, b"<ping/>");
        assert!(!response.possibly_truncated);
    }

    #[tokio::test]
    async fn test_oversized_reply_is_cut_and_flagged() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            if let Ok((_, peer)) = server.recv_from(&mut buf).await {
                let reply = vec![b'x'; MAX_REPLY_SIZE + 500];
                let _ = server.send_to(&reply, peer).await;
            }
        });

        let transport = UdpTransport::new(addr.to_string());
        let response = transport
            .exchange(b"<ping/>", Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(response.bytes.len(), MAX_REPLY_SIZE);
        assert!(response.possibly_truncated);
    }
}
