use crate::constants::*;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strk_calldata_common::sh_println;
use strk_calldata_types::Felt;
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the `allowed_pools` constructor array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolProps {
    /// Pool contract address.
    pub pool_id: Felt,
    /// Maximum pool weight in basis points.
    pub max_weight: u64,
    /// The pool's vToken contract.
    pub v_token: Felt,
}

/// The vault `Settings` constructor struct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultSettings {
    /// Index into `allowed_pools` used as the default deposit target.
    pub default_pool_index: u64,
    /// Management fee in basis points.
    pub fee_bps: u64,
    /// Address receiving the fee.
    pub fee_receiver: Felt,
}

/// Everything needed to assemble the constructor calldata and the `sncast`
/// invocation. Constructed once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// ERC-20 name of the vault token, serialized as a Cairo `ByteArray`.
    pub name: String,
    /// ERC-20 symbol of the vault token, serialized as a Cairo `ByteArray`.
    pub symbol: String,
    /// Underlying asset contract address.
    pub asset: Felt,
    /// Access-control contract address.
    pub access_control: Felt,
    /// Pools the vault may allocate into.
    pub allowed_pools: Vec<PoolProps>,
    /// Fee and default-pool settings.
    pub settings: VaultSettings,
    /// Oracle address used for harvest operations.
    pub oracle: Felt,
    /// `sncast` account name.
    pub account: String,
    /// Starknet RPC endpoint passed to `sncast --url`.
    pub rpc_url: Url,
    /// Declared class hash of the vault contract.
    pub class_hash: Felt,
}

fn default_felt(hex: &str) -> Felt {
    Felt::from_hex(hex).expect("shipped default is a valid felt")
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_VAULT_NAME.to_owned(),
            symbol: DEFAULT_VAULT_SYMBOL.to_owned(),
            asset: default_felt(DEFAULT_ASSET),
            access_control: default_felt(DEFAULT_ACCESS_CONTROL),
            allowed_pools: vec![PoolProps {
                pool_id: default_felt(DEFAULT_POOL_ID),
                max_weight: DEFAULT_POOL_MAX_WEIGHT_BPS,
                v_token: default_felt(DEFAULT_POOL_V_TOKEN),
            }],
            settings: VaultSettings {
                default_pool_index: DEFAULT_POOL_INDEX,
                fee_bps: DEFAULT_FEE_BPS,
                fee_receiver: default_felt(DEFAULT_FEE_RECEIVER),
            },
            oracle: default_felt(DEFAULT_ORACLE),
            account: DEFAULT_ACCOUNT.to_owned(),
            rpc_url: Url::parse(DEFAULT_RPC_URL).expect("shipped default RPC URL is valid"),
            class_hash: default_felt(DEFAULT_CLASS_HASH),
        }
    }
}

impl DeployConfig {
    /// Loads a JSON config file. Fields absent from the file keep their
    /// shipped defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: DeployConfig = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded deployment config");
        Ok(config)
    }

    /// Overrides the `sncast` account name.
    #[must_use]
    pub fn with_account(mut self, account: Option<String>) -> Self {
        if let Some(account) = account {
            self.account = account;
        }
        self
    }

    /// Overrides the RPC endpoint.
    #[must_use]
    pub fn with_rpc_url(mut self, rpc_url: Option<Url>) -> Self {
        if let Some(rpc_url) = rpc_url {
            self.rpc_url = rpc_url;
        }
        self
    }

    /// Overrides the declared class hash.
    #[must_use]
    pub fn with_class_hash(mut self, class_hash: Option<Felt>) -> Self {
        if let Some(class_hash) = class_hash {
            self.class_hash = class_hash;
        }
        self
    }

    /// One line per allowed pool, no trailing newline.
    fn pool_summary(&self) -> String {
        self.allowed_pools
            .iter()
            .enumerate()
            .map(|(idx, pool)| {
                format!(
                    "({}) {} (max weight {} bps, vToken {})",
                    idx, pool.pool_id, pool.max_weight, pool.v_token
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prints a human-readable summary of the deployment through the shared
    /// shell (suppressed in quiet mode).
    pub fn print(&self) {
        sh_println!(
            r#"
{}
========================
Name:           {}
Symbol:         {}
Asset:          {}
Access control: {}
Oracle:         {}
"#,
            "Vault Constructor".green(),
            self.name,
            self.symbol,
            self.asset,
            self.access_control,
            self.oracle
        );

        sh_println!(
            r#"
{}
========================
{}
Default pool index: {}
Fee:                {} bps
Fee receiver:       {}
"#,
            "Allowed Pools".green(),
            self.pool_summary(),
            self.settings.default_pool_index,
            self.settings.fee_bps,
            self.settings.fee_receiver
        );

        sh_println!(
            r#"
{}
========================
Account:    {}
RPC URL:    {}
Class hash: {}
"#,
            "Deployment Target".green(),
            self.account,
            self.rpc_url,
            self.class_hash
        );
    }
}
