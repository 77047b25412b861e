pub mod client;
pub mod iris;
pub mod transport;

pub use client::{lookup, DasClient};
pub use iris::{ParsedReply, ReplyParseError, RequestBuilder, ResponseParser};
pub use transport::{DasTransport, TransportResponse, UdpTransport};
