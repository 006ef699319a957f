use std::rc::Rc;

use alloy_primitives::{address, Address, Bytes, B256, U256};
use common::{
    hashing::output_root, test_utils::WithdrawalTrie, OutputRootProof, WithdrawalTransaction,
};
use output_oracle::{L2OutputOracle, OutputOracleConfig};

use crate::{host::InMemoryHost, instructions::FinalizeWithdrawalArgs, state::PortalConfig, Portal};

pub const PORTAL: Address = address!("beb5fc579115071764c7423a4f12edde41f106ed");

pub const PROPOSER: Address = address!("0000000000000000000000000000000000000b0b");

pub const OWNER: Address = address!("0000000000000000000000000000000000000a0a");

/// L1 externally owned account sending the transactions
pub const ALICE: Address = address!("000000000000000000000000000000000000a11c");

/// L2 account that sent the withdrawals
pub const L2_SENDER: Address = address!("0000000000000000000000000000000000005e5d");

pub const TARGET: Address = address!("0000000000000000000000000000000000007a67");

pub const FINALIZATION_PERIOD: u64 = 100;

pub const SUBMISSION_INTERVAL: u64 = 10;

pub const PROPOSAL_TIMESTAMP: u64 = 10_000;

pub const PORTAL_BALANCE: u64 = 1_000_000_000_000_000_000;

pub fn oracle_config() -> OutputOracleConfig {
    OutputOracleConfig {
        submission_interval: SUBMISSION_INTERVAL,
        l2_block_time: 2,
        starting_block_number: 0,
        starting_timestamp: 0,
        proposer: PROPOSER,
        owner: OWNER,
    }
}

pub fn empty_oracle() -> L2OutputOracle {
    L2OutputOracle::new(oracle_config())
}

pub fn portal_config() -> PortalConfig {
    PortalConfig {
        finalization_period_seconds: FINALIZATION_PERIOD,
    }
}

/// Initialized portal without any output root, called by `ALICE`.
pub fn setup_portal() -> (Portal<L2OutputOracle>, InMemoryHost) {
    let portal = Portal::new(portal_config(), empty_oracle());

    let mut host = InMemoryHost::new(PORTAL);
    host.set_block_number(100);
    host.set_timestamp(PROPOSAL_TIMESTAMP);
    host.set_sender(ALICE);
    portal.initialize(&mut host).unwrap();

    (portal, host)
}

pub fn withdrawal(
    nonce: u64,
    target: Address,
    value: u64,
    gas_limit: u64,
) -> WithdrawalTransaction {
    WithdrawalTransaction {
        nonce: U256::from(nonce),
        sender: L2_SENDER,
        target,
        value: U256::from(value),
        gasLimit: U256::from(gas_limit),
        data: Bytes::new(),
    }
}

pub struct WithdrawalFixture {
    pub portal: Rc<Portal<L2OutputOracle>>,
    pub host: InMemoryHost,
    /// Finalization arguments, in the order the withdrawals were given
    pub withdrawals: Vec<FinalizeWithdrawalArgs>,
}

/// Proposes an output root covering `txs` (plus a few unrelated withdrawals)
/// and moves past its finalization period.
pub fn setup_withdrawals(txs: Vec<WithdrawalTransaction>) -> WithdrawalFixture {
    let mut trie = WithdrawalTrie::from_hashes((1..=8).map(B256::repeat_byte));
    let hashes = txs.iter().map(|tx| trie.insert(tx)).collect::<Vec<_>>();

    let output_root_proof = OutputRootProof {
        version: B256::ZERO,
        stateRoot: B256::repeat_byte(0x11),
        withdrawerStorageRoot: trie.root(),
        latestBlockhash: B256::repeat_byte(0x22),
    };

    let mut oracle = empty_oracle();
    oracle
        .propose_l2_output(
            PROPOSER,
            output_root(&output_root_proof),
            SUBMISSION_INTERVAL,
            PROPOSAL_TIMESTAMP,
        )
        .unwrap();
    let portal = Rc::new(Portal::new(portal_config(), oracle));

    let mut host = InMemoryHost::new(PORTAL);
    host.set_block_number(100);
    host.set_timestamp(PROPOSAL_TIMESTAMP + FINALIZATION_PERIOD + 1);
    host.set_sender(ALICE);
    host.set_balance(PORTAL, U256::from(PORTAL_BALANCE));
    portal.initialize(&mut host).unwrap();

    let withdrawals = txs
        .into_iter()
        .zip(hashes)
        .map(|(tx, hash)| FinalizeWithdrawalArgs {
            tx,
            l2_block_number: SUBMISSION_INTERVAL,
            output_root_proof: output_root_proof.clone(),
            withdrawal_proof: trie.proof(hash),
        })
        .collect();

    WithdrawalFixture {
        portal,
        host,
        withdrawals,
    }
}
