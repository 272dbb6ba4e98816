use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ethers::contract::ContractFactory;
use ethers::prelude::SignerMiddleware;
use ethers::providers::{
    Http, JsonRpcClient, Middleware, PendingTransaction, Provider,
};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, U256};
use eyre::{bail, Context, ContextCompat};
use tracing::{info, instrument};

use super::{Chain, ConfirmedContract, PendingDeployment};
use crate::abis::Greeter;
use crate::forge_utils::ContractArtifact;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

pub type RpcSigner<P = Http> = SignerMiddleware<Provider<P>, LocalWallet>;

/// [`Chain`] backed by a JSON-RPC node, signing locally with a fixed set of
/// wallets.
#[derive(Debug)]
pub struct RpcChain<P = Http> {
    provider: Provider<P>,
    wallets: Vec<LocalWallet>,
    artifact: ContractArtifact,
}

impl RpcChain {
    /// Connects to `rpc_url` and binds every wallet to the node's chain id.
    pub async fn connect(
        rpc_url: &str,
        wallets: Vec<LocalWallet>,
        artifact: ContractArtifact,
    ) -> eyre::Result<Self> {
        let provider =
            Provider::<Http>::try_from(rpc_url)?.interval(POLL_INTERVAL);

        let chain_id = provider
            .get_chainid()
            .await
            .with_context(|| format!("Fetching chain id from {rpc_url}"))?;

        info!("Connected to chain {chain_id}");

        let wallets = wallets
            .into_iter()
            .map(|wallet| wallet.with_chain_id(chain_id.as_u64()))
            .collect();

        Ok(Self::new(provider, wallets, artifact))
    }
}

impl<P> RpcChain<P>
where
    P: JsonRpcClient + Clone + 'static,
{
    /// Wallets are used as given, their chain ids must already match the node
    pub fn new(
        provider: Provider<P>,
        wallets: Vec<LocalWallet>,
        artifact: ContractArtifact,
    ) -> Self {
        Self {
            provider,
            wallets,
            artifact,
        }
    }

    fn signer(&self, address: Address) -> eyre::Result<RpcSigner<P>> {
        let wallet = self
            .wallets
            .iter()
            .find(|wallet| wallet.address() == address)
            .with_context(|| format!("No wallet for signer {address:?}"))?;

        Ok(SignerMiddleware::new(self.provider.clone(), wallet.clone()))
    }
}

#[async_trait]
impl<P> Chain for RpcChain<P>
where
    P: JsonRpcClient + Clone + 'static,
{
    async fn signers(&self) -> eyre::Result<Vec<Address>> {
        Ok(self.wallets.iter().map(Signer::address).collect())
    }

    async fn balance(&self, signer: Address) -> eyre::Result<U256> {
        let balance = self
            .provider
            .get_balance(signer, None)
            .await
            .with_context(|| format!("Fetching balance of {signer:?}"))?;

        Ok(balance)
    }

    #[instrument(skip(self, greeting))]
    async fn submit_deployment(
        &self,
        signer: Address,
        greeting: &str,
    ) -> eyre::Result<PendingDeployment> {
        let client = Arc::new(self.signer(signer)?);

        let factory = ContractFactory::new(
            self.artifact.abi.clone(),
            self.artifact.bytecode.clone(),
            client.clone(),
        );

        let mut tx = factory
            .deploy(greeting.to_string())
            .context("Encoding constructor arguments")?
            .tx;

        client
            .fill_transaction(&mut tx, None)
            .await
            .context("Filling transaction")?;

        let pending = client
            .send_transaction(tx, None)
            .await
            .context("Send transaction")?;

        let transaction_hash = pending.tx_hash();

        info!("Submitted deployment {transaction_hash:?}");

        Ok(PendingDeployment {
            deployer: signer,
            transaction_hash,
        })
    }

    #[instrument(skip_all, fields(tx = ?pending.transaction_hash))]
    async fn confirm_deployment(
        &self,
        pending: &PendingDeployment,
    ) -> eyre::Result<ConfirmedContract> {
        let receipt =
            PendingTransaction::new(pending.transaction_hash, &self.provider)
                .confirmations(1)
                .await
                .context("Awaiting receipt")?
                .context("Deployment transaction dropped from the mempool")?;

        if receipt.status != Some(1.into()) {
            bail!(
                "Deployment transaction {:?} reverted",
                pending.transaction_hash
            );
        }

        let address = receipt
            .contract_address
            .context("Receipt has no contract address")?;

        Ok(ConfirmedContract::confirmed(
            address,
            pending,
            receipt.block_number,
        ))
    }

    async fn greet(&self, contract: Address) -> eyre::Result<String> {
        let greeter = Greeter::new(contract, Arc::new(self.provider.clone()));

        let greeting = greeter
            .greet()
            .call()
            .await
            .with_context(|| format!("Calling greet() on {contract:?}"))?;

        Ok(greeting)
    }
}
