use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod private_key;

pub use private_key::PrivateKey;
use reqwest::Url;

pub const DEFAULT_VERIFICATION_GREETING: &str = "Hello world!";

/// Deploys the Greeter contract
#[derive(Debug, Clone, Parser)]
#[clap(rename_all = "kebab-case", version, about)]
pub struct Args {
    #[clap(flatten)]
    pub network: NetworkArgs,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Deploy the Greeter contract and print its address
    Deploy(DeployArgs),

    /// Deploy the Greeter contract and check that it greets back
    Verify(VerifyArgs),
}

#[derive(Debug, Clone, clap::Args)]
#[clap(rename_all = "kebab-case")]
pub struct DeployArgs {
    /// Say hello, be nice.
    ///
    /// Prompted for when omitted
    #[clap(short, long, env)]
    pub greeting: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
#[clap(rename_all = "kebab-case")]
pub struct VerifyArgs {
    /// Greeting the deployed contract is expected to return
    #[clap(short, long, env = "VERIFY_GREETING", default_value = DEFAULT_VERIFICATION_GREETING)]
    pub greeting: String,
}

#[derive(Debug, Clone, clap::Args)]
#[clap(rename_all = "kebab-case")]
pub struct NetworkArgs {
    /// Path to an optional YAML network configuration file
    ///
    /// Values given on the command line or through the environment
    /// take precedence over the file
    #[clap(short, long, env, global = true)]
    pub config: Option<PathBuf>,

    /// The RPC Url of the node to deploy to
    #[clap(short, long, env, global = true)]
    pub rpc_url: Option<Url>,

    /// Comma separated private keys, enumerated before any mnemonic accounts
    #[clap(long, env, global = true, value_delimiter = ',')]
    pub private_keys: Vec<PrivateKey>,

    /// BIP-39 mnemonic to derive signing accounts from
    #[clap(long, env, global = true)]
    pub mnemonic: Option<String>,

    /// Number of accounts to derive from the mnemonic
    #[clap(long, env, global = true)]
    pub accounts: Option<u32>,

    /// Which of the enumerated signers deploys the contract
    #[clap(long, env, global = true)]
    pub signer_index: Option<usize>,

    /// Seconds to wait for the deployment to be confirmed
    #[clap(long, env, global = true)]
    pub confirmation_timeout: Option<u64>,

    /// Foundry project containing the Greeter contract
    #[clap(long, env, global = true)]
    pub contracts_dir: Option<PathBuf>,
}
