//! IRIS DAS Domain Layer
pub mod config;
pub mod domain_status;
pub mod errors;
pub mod lookup_config;
pub mod lookup_result;

pub use config::{
    CliOverrides, Config, ConfigError, DasConfig, LoggingConfig, OutputConfig, OutputFormat,
};
pub use domain_status::DomainStatus;
pub use errors::LookupError;
pub use lookup_config::{LookupConfig, DEFAULT_SERVER_ADDRESS, DEFAULT_TIMEOUT};
pub use lookup_result::LookupResult;
