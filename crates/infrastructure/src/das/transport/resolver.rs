use iris_das_domain::LookupError;
use std::io;
use std::net::SocketAddr;

/// Resolves a `host:port` target to a single endpoint, preferring IPv4.
pub async fn resolve(server: &str) -> Result<SocketAddr, LookupError> {
    let addrs: Vec<SocketAddr> = tokio::net::lookup_host(server)
        .await
        .map_err(|source| LookupError::AddressResolution {
            server: server.to_string(),
            source,
        })?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| LookupError::AddressResolution {
            server: server.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
        })
}
