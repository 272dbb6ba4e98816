use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::PrivateKey;
use crate::types::SignerIndex;

/// Network settings that can be kept in a YAML file instead of being
/// passed on every invocation.
///
/// ```yaml
/// network:
///   rpc_url: http://localhost:8545
///   mnemonic: test test test test test test test test test test test junk
///   accounts: 3
///   signer_index: 0
///   confirmation_timeout: 60
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    #[serde(default)]
    pub rpc_url: Option<String>,

    #[serde(default)]
    pub private_keys: Vec<PrivateKey>,

    #[serde(default)]
    pub mnemonic: Option<String>,

    #[serde(default)]
    pub accounts: Option<u32>,

    #[serde(default)]
    pub signer_index: Option<SignerIndex>,

    /// In seconds
    #[serde(default)]
    pub confirmation_timeout: Option<u64>,

    #[serde(default)]
    pub contracts_dir: Option<PathBuf>,
}
