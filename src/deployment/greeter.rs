use std::time::Duration;

use ethers::types::Address;
use tracing::{info, instrument};

use crate::chain::{Chain, ConfirmedContract};
use crate::types::SignerIndex;

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("no signer at index {index}, {available} available")]
    SignerUnavailable { index: SignerIndex, available: usize },

    #[error("failed to enumerate signers: {0:#}")]
    Signers(eyre::Report),

    #[error("failed to fetch balance of {signer:?}: {error:#}")]
    Balance { signer: Address, error: eyre::Report },

    #[error("deployment transaction was rejected: {0:#}")]
    Submission(eyre::Report),

    #[error("deployment was not confirmed: {0:#}")]
    Confirmation(eyre::Report),
}

/// Returns the signer at `index` in the chain's enumeration order.
pub async fn select_signer<C>(
    chain: &C,
    index: SignerIndex,
) -> Result<Address, DeployError>
where
    C: Chain + ?Sized,
{
    let signers = chain.signers().await.map_err(DeployError::Signers)?;

    signers
        .get(*index)
        .copied()
        .ok_or(DeployError::SignerUnavailable {
            index,
            available: signers.len(),
        })
}

/// Deploys a Greeter from the signer at `signer_index` and blocks until the
/// creation transaction is confirmed.
///
/// `greeting` is passed to the constructor verbatim. Waiting for the
/// confirmation longer than `confirmation_timeout` is an error.
#[instrument(name = "Greeter", skip(chain, greeting))]
pub async fn deploy_greeter<C>(
    chain: &C,
    signer_index: SignerIndex,
    greeting: &str,
    confirmation_timeout: Duration,
) -> Result<ConfirmedContract, DeployError>
where
    C: Chain + ?Sized,
{
    let deployer = select_signer(chain, signer_index).await?;

    let balance = chain
        .balance(deployer)
        .await
        .map_err(|error| DeployError::Balance {
            signer: deployer,
            error,
        })?;

    println!("Deployer address: {deployer:?}");
    println!("Deployer balance: {balance}");

    let pending = chain
        .submit_deployment(deployer, greeting)
        .await
        .map_err(DeployError::Submission)?;

    let contract = tokio::time::timeout(
        confirmation_timeout,
        chain.confirm_deployment(&pending),
    )
    .await
    .map_err(|_| {
        DeployError::Confirmation(eyre::eyre!(
            "timed out after {confirmation_timeout:?} waiting for {:?}",
            pending.transaction_hash
        ))
    })?
    .map_err(DeployError::Confirmation)?;

    info!(
        "Confirmed in block {:?} by transaction {:?}",
        contract.block_number(),
        contract.transaction_hash()
    );

    println!("Greeter deployed to: {:?}", contract.address());

    Ok(contract)
}
