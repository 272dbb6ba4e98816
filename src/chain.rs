use async_trait::async_trait;
use ethers::types::{Address, H256, U256, U64};

#[cfg(test)]
pub mod in_memory;
pub mod rpc;

/// A creation transaction that was accepted by the node but has not been
/// confirmed yet. It deliberately carries no contract address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeployment {
    pub deployer: Address,
    pub transaction_hash: H256,
}

/// Handle to a Greeter whose creation transaction has been confirmed.
///
/// Only [`Chain::confirm_deployment`] implementations create these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedContract {
    address: Address,
    deployer: Address,
    transaction_hash: H256,
    block_number: Option<U64>,
}

impl ConfirmedContract {
    pub(crate) fn confirmed(
        address: Address,
        pending: &PendingDeployment,
        block_number: Option<U64>,
    ) -> Self {
        Self {
            address,
            deployer: pending.deployer,
            transaction_hash: pending.transaction_hash,
            block_number,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }

    pub fn transaction_hash(&self) -> H256 {
        self.transaction_hash
    }

    pub fn block_number(&self) -> Option<U64> {
        self.block_number
    }

    pub async fn greet<C>(&self, chain: &C) -> eyre::Result<String>
    where
        C: Chain + ?Sized,
    {
        chain.greet(self.address).await
    }
}

/// Everything the deployer needs from a node.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Chain: Send + Sync {
    /// Signing accounts in a stable order
    async fn signers(&self) -> eyre::Result<Vec<Address>>;

    async fn balance(&self, signer: Address) -> eyre::Result<U256>;

    /// Signs and submits a Greeter creation transaction with `greeting` as
    /// the constructor argument, without waiting for it to be mined
    async fn submit_deployment(
        &self,
        signer: Address,
        greeting: &str,
    ) -> eyre::Result<PendingDeployment>;

    /// Resolves once the creation transaction has one confirmation and
    /// did not revert
    async fn confirm_deployment(
        &self,
        pending: &PendingDeployment,
    ) -> eyre::Result<ConfirmedContract>;

    /// Calls `greet()` on a deployed Greeter
    async fn greet(&self, contract: Address) -> eyre::Result<String>;
}
