pub mod das;
pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use das::DasConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use root::{CliOverrides, Config};
