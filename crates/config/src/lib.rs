mod config;
pub mod constants;

pub use config::{ConfigError, DeployConfig, PoolProps, VaultSettings};
