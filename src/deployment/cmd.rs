use std::path::PathBuf;
use std::time::Duration;

use ethers::signers::coins_bip39::English;
use ethers::signers::{LocalWallet, MnemonicBuilder};
use eyre::Context;
use reqwest::Url;

use super::DEFAULT_CONTRACTS_DIR;
use crate::cli::{NetworkArgs, PrivateKey};
use crate::config::Config;
use crate::types::SignerIndex;

pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";
pub const DEFAULT_MNEMONIC_ACCOUNTS: u32 = 10;
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 120;

/// Network settings after layering command line and environment values over
/// the config file.
pub struct Cmd {
    pub rpc_url: Url,
    pub private_keys: Vec<PrivateKey>,
    pub mnemonic: Option<String>,
    pub accounts: u32,
    pub signer_index: SignerIndex,
    pub confirmation_timeout: Duration,
    pub contracts_dir: PathBuf,
}

impl Cmd {
    pub fn new(args: NetworkArgs, config: Config) -> eyre::Result<Self> {
        let network = config.network;

        let rpc_url = match args.rpc_url {
            Some(rpc_url) => rpc_url,
            None => network
                .rpc_url
                .as_deref()
                .unwrap_or(DEFAULT_RPC_URL)
                .parse()
                .context("Parsing rpc_url from config")?,
        };

        let private_keys = if args.private_keys.is_empty() {
            network.private_keys
        } else {
            args.private_keys
        };

        Ok(Self {
            rpc_url,
            private_keys,
            mnemonic: args.mnemonic.or(network.mnemonic),
            accounts: args
                .accounts
                .or(network.accounts)
                .unwrap_or(DEFAULT_MNEMONIC_ACCOUNTS),
            signer_index: args
                .signer_index
                .map(SignerIndex)
                .or(network.signer_index)
                .unwrap_or_default(),
            confirmation_timeout: Duration::from_secs(
                args.confirmation_timeout
                    .or(network.confirmation_timeout)
                    .unwrap_or(DEFAULT_CONFIRMATION_TIMEOUT_SECS),
            ),
            contracts_dir: args
                .contracts_dir
                .or(network.contracts_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTRACTS_DIR)),
        })
    }

    /// Explicit private keys first, then the accounts derived from the
    /// mnemonic in derivation order
    pub fn wallets(&self) -> eyre::Result<Vec<LocalWallet>> {
        let mut wallets: Vec<LocalWallet> =
            self.private_keys.iter().map(PrivateKey::wallet).collect();

        if let Some(phrase) = self.mnemonic.as_deref() {
            for index in 0..self.accounts {
                let wallet = MnemonicBuilder::<English>::default()
                    .phrase(phrase)
                    .index(index)?
                    .build()
                    .with_context(|| {
                        format!("Deriving account {index} from mnemonic")
                    })?;

                wallets.push(wallet);
            }
        }

        Ok(wallets)
    }
}
