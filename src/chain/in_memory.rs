use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use ethers::types::{Address, H256, U256, U64};
use ethers::utils::{get_contract_address, keccak256, parse_ether};
use eyre::{bail, ContextCompat};

use super::{Chain, ConfirmedContract, PendingDeployment};

/// Flat fee charged for every deployment
const DEPLOYMENT_COST: u64 = 1_000_000_000_000_000;

/// Deterministic chain that mines every creation transaction instantly once
/// asked to confirm it.
pub struct InMemoryChain {
    state: Mutex<State>,
    behaviour: Behaviour,
}

#[derive(Default)]
struct Behaviour {
    fail_balance: bool,
    revert_constructor: bool,
    hold_confirmations: bool,
    tampered_greeting: Option<String>,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    pending: HashMap<H256, PendingCreate>,
    contracts: HashMap<Address, String>,
    block_number: u64,
    submissions: usize,
}

struct Account {
    address: Address,
    balance: U256,
    nonce: u64,
}

struct PendingCreate {
    address: Address,
    greeting: String,
}

impl InMemoryChain {
    /// `count` signers, each funded with 10 000 ether
    pub fn with_signers(count: usize) -> Self {
        let balance = parse_ether(10_000u64).expect("valid ether amount");

        let accounts = (0..count)
            .map(|i| Account {
                address: Address::from_low_u64_be(i as u64 + 1),
                balance,
                nonce: 0,
            })
            .collect();

        Self {
            state: Mutex::new(State {
                accounts,
                ..Default::default()
            }),
            behaviour: Behaviour::default(),
        }
    }

    pub fn without_signers() -> Self {
        Self::with_signers(0)
    }

    pub fn with_balance(self, signer: usize, balance: U256) -> Self {
        self.state.lock().unwrap().accounts[signer].balance = balance;
        self
    }

    pub fn failing_balance(mut self) -> Self {
        self.behaviour.fail_balance = true;
        self
    }

    pub fn reverting_constructor(mut self) -> Self {
        self.behaviour.revert_constructor = true;
        self
    }

    /// Confirmation never arrives
    pub fn holding_confirmations(mut self) -> Self {
        self.behaviour.hold_confirmations = true;
        self
    }

    /// Every `greet()` answers with `greeting`, whatever was deployed
    pub fn tampered_greeting(mut self, greeting: impl ToString) -> Self {
        self.behaviour.tampered_greeting = Some(greeting.to_string());
        self
    }

    pub fn submissions(&self) -> usize {
        self.state.lock().unwrap().submissions
    }

    pub fn is_deployed(&self, contract: Address) -> bool {
        self.state.lock().unwrap().contracts.contains_key(&contract)
    }

    pub fn balance_of(&self, signer: usize) -> U256 {
        self.state.lock().unwrap().accounts[signer].balance
    }
}

#[async_trait]
impl Chain for InMemoryChain {
    async fn signers(&self) -> eyre::Result<Vec<Address>> {
        let state = self.state.lock().unwrap();

        Ok(state.accounts.iter().map(|account| account.address).collect())
    }

    async fn balance(&self, signer: Address) -> eyre::Result<U256> {
        if self.behaviour.fail_balance {
            bail!("connection refused");
        }

        let state = self.state.lock().unwrap();
        let account = state
            .accounts
            .iter()
            .find(|account| account.address == signer)
            .context("unknown account")?;

        Ok(account.balance)
    }

    async fn submit_deployment(
        &self,
        signer: Address,
        greeting: &str,
    ) -> eyre::Result<PendingDeployment> {
        let mut state = self.state.lock().unwrap();
        state.submissions += 1;

        let account = state
            .accounts
            .iter_mut()
            .find(|account| account.address == signer)
            .context("unknown account")?;

        let cost = U256::from(DEPLOYMENT_COST);
        if account.balance < cost {
            bail!(
                "insufficient funds for gas * price + value: have {} want {}",
                account.balance,
                cost
            );
        }

        account.balance -= cost;

        let nonce = account.nonce;
        account.nonce += 1;

        let address = get_contract_address(signer, nonce);
        let transaction_hash = H256::from(keccak256(
            [signer.as_bytes(), &nonce.to_be_bytes()[..]].concat(),
        ));

        state.pending.insert(
            transaction_hash,
            PendingCreate {
                address,
                greeting: greeting.to_string(),
            },
        );

        Ok(PendingDeployment {
            deployer: signer,
            transaction_hash,
        })
    }

    async fn confirm_deployment(
        &self,
        pending: &PendingDeployment,
    ) -> eyre::Result<ConfirmedContract> {
        if self.behaviour.hold_confirmations {
            std::future::pending::<()>().await;
        }

        let mut state = self.state.lock().unwrap();

        let create = state
            .pending
            .remove(&pending.transaction_hash)
            .context("unknown transaction")?;

        state.block_number += 1;
        let block_number = U64::from(state.block_number);

        if self.behaviour.revert_constructor {
            bail!(
                "transaction {:?} reverted in block {block_number}",
                pending.transaction_hash
            );
        }

        state.contracts.insert(create.address, create.greeting);

        Ok(ConfirmedContract::confirmed(
            create.address,
            pending,
            Some(block_number),
        ))
    }

    async fn greet(&self, contract: Address) -> eyre::Result<String> {
        let state = self.state.lock().unwrap();

        let greeting = state
            .contracts
            .get(&contract)
            .with_context(|| format!("no contract code at {contract:?}"))?;

        Ok(self
            .behaviour
            .tampered_greeting
            .clone()
            .unwrap_or_else(|| greeting.clone()))
    }
}
