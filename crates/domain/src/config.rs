pub mod database;
pub mod errors;
pub mod ingest;
pub mod logging;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use ingest::IngestConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
