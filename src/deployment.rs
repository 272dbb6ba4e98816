use std::path::Path;

use tracing::info;

use self::cmd::Cmd;
use self::greeter::deploy_greeter;
use crate::chain::rpc::RpcChain;
use crate::cli::{Args, Command};
use crate::config::Config;
use crate::forge_utils::{ContractArtifact, ContractSpec};
use crate::verification::verify_greeting;
use crate::{interactive, serde_utils};

pub mod cmd;
pub mod greeter;

pub const DEFAULT_CONTRACTS_DIR: &str = "./greeter-contracts";

pub fn greeter_contract_spec() -> ContractSpec {
    ContractSpec::path_name("src/Greeter.sol", "Greeter")
}

pub async fn run_deployment(args: Args) -> eyre::Result<()> {
    let config = match args.network.config.as_ref() {
        Some(path) => serde_utils::read_deserialize(path).await?,
        None => Config::default(),
    };

    let cmd = Cmd::new(args.network, config)?;

    match args.command {
        Command::Deploy(deploy) => {
            let greeting = interactive::resolve_greeting(deploy.greeting)?;

            let chain = connect(&cmd).await?;

            deploy_greeter(
                &chain,
                cmd.signer_index,
                &greeting,
                cmd.confirmation_timeout,
            )
            .await?;
        }
        Command::Verify(verify) => {
            let chain = connect(&cmd).await?;

            let greeter = verify_greeting(
                &chain,
                cmd.signer_index,
                &verify.greeting,
                cmd.confirmation_timeout,
            )
            .await?;

            println!(
                "Greeter at {:?} deployed by {:?} returned {:?}",
                greeter.address(),
                greeter.deployer(),
                verify.greeting
            );
        }
    }

    Ok(())
}

async fn connect(cmd: &Cmd) -> eyre::Result<RpcChain> {
    let wallets = cmd.wallets()?;

    info!(
        "Loaded {} signers, deploying from #{}",
        wallets.len(),
        cmd.signer_index
    );

    let artifact = load_artifact(&cmd.contracts_dir).await?;

    RpcChain::connect(cmd.rpc_url.as_str(), wallets, artifact).await
}

async fn load_artifact(contracts_dir: &Path) -> eyre::Result<ContractArtifact> {
    ContractArtifact::build(contracts_dir, &greeter_contract_spec()).await
}
