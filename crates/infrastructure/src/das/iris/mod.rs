pub mod request_builder;
pub mod response_parser;

pub use request_builder::{RequestBuilder, ENTITY_CLASS, IRIS1_NAMESPACE, REGISTRY_TYPE};
pub use response_parser::{ParsedReply, ReplyParseError, ResponseParser};
