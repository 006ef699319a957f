#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use alloy_primitives::{address, Address, Bytes, B256, U256};
use common::{
    hashing::{output_root, withdrawal_hash},
    test_utils::WithdrawalTrie,
    OutputRootProof, WithdrawalTransaction,
};
use output_oracle::{L2OutputOracle, OutputOracle, OutputOracleConfig, OutputProposal};
use portal::{
    host::{Host, InMemoryHost},
    instructions::FinalizeWithdrawalArgs,
    state::PortalConfig,
    Portal,
};

pub const PORTAL: Address = address!("49048044d57e1c92a77f79988d21fa8faf74e97e");

pub const PROPOSER: Address = address!("0000000000000000000000000000000000000b0b");

pub const OWNER: Address = address!("0000000000000000000000000000000000000a0a");

pub const ALICE: Address = address!("000000000000000000000000000000000000a11c");

pub const L2_SENDER: Address = address!("0000000000000000000000000000000000005e5d");

pub const FINALIZATION_PERIOD: u64 = 3_600;

pub const SUBMISSION_INTERVAL: u64 = 120;

pub const L2_BLOCK_TIME: u64 = 2;

pub const GENESIS_TIMESTAMP: u64 = 1_700_000_000;

/// Output oracle shared between the test and the portal, so that outputs can
/// be proposed and deleted after the portal was created.
#[derive(Debug, Clone)]
pub struct SharedOracle(pub Rc<RefCell<L2OutputOracle>>);

impl OutputOracle for SharedOracle {
    fn get_l2_output(&self, l2_block_number: u64) -> Option<OutputProposal> {
        self.0.borrow().get_l2_output(l2_block_number)
    }
}

pub struct TestEnv {
    pub oracle: Rc<RefCell<L2OutputOracle>>,
    pub portal: Rc<Portal<SharedOracle>>,
    pub host: InMemoryHost,
}

impl TestEnv {
    pub fn new() -> Self {
        let oracle = Rc::new(RefCell::new(L2OutputOracle::new(OutputOracleConfig {
            submission_interval: SUBMISSION_INTERVAL,
            l2_block_time: L2_BLOCK_TIME,
            starting_block_number: 0,
            starting_timestamp: GENESIS_TIMESTAMP,
            proposer: PROPOSER,
            owner: OWNER,
        })));

        let config = PortalConfig {
            finalization_period_seconds: FINALIZATION_PERIOD,
        };
        let portal = Rc::new(Portal::new(config, SharedOracle(oracle.clone())));

        let mut host = InMemoryHost::new(PORTAL);
        host.set_block_number(1_000);
        host.set_timestamp(GENESIS_TIMESTAMP);
        host.set_sender(ALICE);
        host.set_balance(PORTAL, U256::from(1_000_000_000_000_000_000u64));
        portal.initialize(&mut host).unwrap();

        Self {
            oracle,
            portal,
            host,
        }
    }

    /// Proposes the next output, committing to a storage trie that contains `trie`.
    /// Returns the L2 block number and the output root preimage.
    pub fn propose(&mut self, trie: &WithdrawalTrie) -> (u64, OutputRootProof) {
        let mut oracle = self.oracle.borrow_mut();
        let l2_block_number = oracle.next_block_number();

        // Proposals can only be made once the L2 block exists
        let l2_timestamp = oracle.compute_l2_timestamp(l2_block_number);
        if self.host.timestamp() <= l2_timestamp {
            self.host.set_timestamp(l2_timestamp + 1);
        }

        let output_root_proof = OutputRootProof {
            version: B256::ZERO,
            stateRoot: B256::repeat_byte(l2_block_number as u8),
            withdrawerStorageRoot: trie.root(),
            latestBlockhash: B256::repeat_byte(0xbb),
        };
        oracle
            .propose_l2_output(
                PROPOSER,
                output_root(&output_root_proof),
                l2_block_number,
                self.host.timestamp(),
            )
            .unwrap();

        (l2_block_number, output_root_proof)
    }
}

pub fn withdrawal(
    nonce: u64,
    target: Address,
    value: u64,
    gas_limit: u64,
    data: Bytes,
) -> WithdrawalTransaction {
    WithdrawalTransaction {
        nonce: U256::from(nonce),
        sender: L2_SENDER,
        target,
        value: U256::from(value),
        gasLimit: U256::from(gas_limit),
        data,
    }
}

pub fn finalize_args(
    trie: &WithdrawalTrie,
    tx: &WithdrawalTransaction,
    l2_block_number: u64,
    output_root_proof: &OutputRootProof,
) -> FinalizeWithdrawalArgs {
    FinalizeWithdrawalArgs {
        tx: tx.clone(),
        l2_block_number,
        output_root_proof: output_root_proof.clone(),
        withdrawal_proof: trie.proof(withdrawal_hash(tx)),
    }
}
