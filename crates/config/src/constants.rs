//! Shipped deployment constants for the Numo wBTC vault on Starknet mainnet.
//! `DeployConfig::default()` is built from these; a JSON config file or CLI
//! flags override them.

/// ERC-20 metadata of the vault token.
pub const DEFAULT_VAULT_NAME: &str = "Numo Vault wBTC";
pub const DEFAULT_VAULT_SYMBOL: &str = "NVwBTC";

/// Underlying wBTC asset contract.
pub const DEFAULT_ASSET: &str =
    "0x03Fe2b97C1Fd336E750087D68B9b867997Fd64a2661fF3ca5A7C771641e8e7AC";

/// Access-control contract governing the vault.
pub const DEFAULT_ACCESS_CONTROL: &str =
    "0x038d9c69eed034ba4765920f7b3c9d57acf8ef447230c4529ddea660d42a6487";

/// The single allowed pool: its address, weight cap and vToken.
pub const DEFAULT_POOL_ID: &str =
    "0x451fe483d5921a2919ddd81d0de6696669bccdacd859f72a4fba7656b97c3b5";
/// 100% in basis points.
pub const DEFAULT_POOL_MAX_WEIGHT_BPS: u64 = 10_000;
pub const DEFAULT_POOL_V_TOKEN: &str =
    "0x4ecb0667140b9f45b067d026953ed79f22723f1cfac05a7b26c3ac06c88f56c";

/// Vault settings tuple.
pub const DEFAULT_POOL_INDEX: u64 = 0;
pub const DEFAULT_FEE_BPS: u64 = 100;
pub const DEFAULT_FEE_RECEIVER: &str =
    "0x0466617918874f335728dbe0903376d1d9756137dd70e927164af4855e1ddae1";

/// Oracle used for harvest operations.
pub const DEFAULT_ORACLE: &str =
    "0xfe4bfb1b353ba51eb34dff963017f94af5a5cf8bdf3dfc191c504657f3c05";

/// Deployment target.
pub const DEFAULT_ACCOUNT: &str = "aguilar1x";
pub const DEFAULT_RPC_URL: &str =
    "https://starknet-mainnet.g.alchemy.com/starknet/version/rpc/v0_9/c0P2DVGVr0OOBtgc3tSqm";
pub const DEFAULT_CLASS_HASH: &str =
    "0x07b23ad6a013abcf5858942b457fc51f99c15c14e6dd88fa86d8a3c9da45aedf";
