pub mod das_server_mock;

pub use das_server_mock::{MockDasServer, MockReply};
