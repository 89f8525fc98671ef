use clap::Parser;
use std::path::PathBuf;
use strk_calldata_config::{ConfigError, DeployConfig};
use strk_calldata_types::Felt;
use url::Url;

/// Assembles the positional constructor calldata for the vault deployment,
/// writes it to a file and prints the matching `sncast deploy` command.
#[derive(Debug, Clone, Parser)]
#[command(name = "strk-calldata", version, about)]
pub struct Cli {
    /// Path to a JSON config overriding the shipped deployment constants.
    #[arg(long, help_heading = "Input")]
    pub config: Option<PathBuf>,

    /// File the calldata is written to, one value per line.
    #[arg(long, short = 'o', default_value = "calldata.txt", help_heading = "Output")]
    pub output: PathBuf,

    /// Suppress all console output (the file is still written).
    #[arg(long, help_heading = "Output")]
    pub silent: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help_heading = "Output")]
    pub verbosity: u8,

    /// Print a summary of the effective deployment config before the calldata.
    #[arg(long, help_heading = "Output")]
    pub show_config: bool,

    /// `sncast` account name to deploy with.
    #[arg(long, env = "SNCAST_ACCOUNT", help_heading = "Deployment")]
    pub account: Option<String>,

    /// Starknet RPC endpoint.
    #[arg(long, env = "STARKNET_RPC_URL", help_heading = "Deployment")]
    pub url: Option<Url>,

    /// Class hash of the declared vault contract.
    #[arg(long, help_heading = "Deployment")]
    pub class_hash: Option<Felt>,
}

impl Cli {
    /// Default log directive for the chosen verbosity; `RUST_LOG` still wins
    /// when set.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Resolves the effective config: file (or defaults), then CLI overrides.
    pub fn into_deploy_config(self) -> Result<DeployConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => DeployConfig::load(path)?,
            None => DeployConfig::default(),
        };
        Ok(base
            .with_account(self.account)
            .with_rpc_url(self.url)
            .with_class_hash(self.class_hash))
    }
}
