//! IRIS DAS Infrastructure Layer
//!
//! IRIS1 payload encoding, reply classification and the UDP exchange with a
//! Domain Availability Service server.
pub mod das;

pub use das::client::{lookup, DasClient};
