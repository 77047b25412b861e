#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Clone)]
pub enum MockReply {
    /// Send this body back verbatim.
    Fixed(String),
    /// Answer with a `<domain>` document for the requested name.
    Status(&'static str),
    /// Read requests, never answer.
    Silent,
}

pub struct MockDasServer {
    addr: SocketAddr,
    requests: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDasServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = requests.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            let request = String::from_utf8_lossy(&buf[..len]).into_owned();
                            if let Some(body) = Self::build_reply(&reply, &request) {
                                let _ = socket.send_to(body.as_bytes(), peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn server_address(&self) -> String {
        self.addr.to_string()
    }

    pub fn requests_received(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn build_reply(reply: &MockReply, request: &str) -> Option<String> {
        match reply {
            MockReply::Fixed(body) => Some(body.clone()),
            MockReply::Status(marker) => {
                let name = Self::entity_name(request).unwrap_or_default();
                Some(format!(
                    "<domain><domainName>{}</domainName><status><{}/></status></domain>",
                    name, marker
                ))
            }
            MockReply::Silent => None,
        }
    }

    pub fn entity_name(request: &str) -> Option<String> {
        let start = request.find("entityName=\"")? + "entityName=\"".len();
        let len = request[start..].find('"')?;
        Some(request[start..start + len].to_string())
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDasServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
