use std::time::Duration;

use ethers::types::Address;
use tracing::{info, instrument};

use crate::chain::{Chain, ConfirmedContract};
use crate::deployment::greeter::{deploy_greeter, DeployError};
use crate::types::SignerIndex;

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error(transparent)]
    Deployment(#[from] DeployError),

    #[error("calling greet() on {address:?} failed: {error:#}")]
    Read { address: Address, error: eyre::Report },

    #[error("greet() returned {actual:?}, expected {expected:?}")]
    Mismatch { expected: String, actual: String },
}

/// Deploys a fresh Greeter with `greeting` and checks that `greet()` returns
/// it byte for byte.
#[instrument(name = "Verification", skip(chain, greeting))]
pub async fn verify_greeting<C>(
    chain: &C,
    signer_index: SignerIndex,
    greeting: &str,
    confirmation_timeout: Duration,
) -> Result<ConfirmedContract, VerificationError>
where
    C: Chain + ?Sized,
{
    let greeter =
        deploy_greeter(chain, signer_index, greeting, confirmation_timeout)
            .await?;

    let actual = greeter.greet(chain).await.map_err(|error| {
        VerificationError::Read {
            address: greeter.address(),
            error,
        }
    })?;

    if actual.as_bytes() != greeting.as_bytes() {
        return Err(VerificationError::Mismatch {
            expected: greeting.to_string(),
            actual,
        });
    }

    info!("greet() returned the expected greeting");

    Ok(greeter)
}
