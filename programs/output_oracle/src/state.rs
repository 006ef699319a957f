use alloy_primitives::{Address, B256};

use crate::constants::{L2_BLOCK_TIME, STARTING_BLOCK_NUMBER, SUBMISSION_INTERVAL};

/// An output root committed for an L2 block, together with the L1 timestamp
/// at which it was proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputProposal {
    pub output_root: B256,
    pub timestamp: u64,
}

/// Parameters of an [`L2OutputOracle`](crate::L2OutputOracle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOracleConfig {
    /// Number of L2 blocks between two consecutive proposals.
    pub submission_interval: u64,
    /// Seconds between two L2 blocks.
    pub l2_block_time: u64,
    /// L2 block of the genesis output; the first proposal is for
    /// `starting_block_number + submission_interval`.
    pub starting_block_number: u64,
    /// Timestamp of the L2 block `starting_block_number`.
    pub starting_timestamp: u64,
    /// Only account allowed to propose outputs.
    pub proposer: Address,
    /// Only account allowed to delete outputs.
    pub owner: Address,
}

impl OutputOracleConfig {
    pub fn new(proposer: Address, owner: Address, starting_timestamp: u64) -> Self {
        Self {
            submission_interval: SUBMISSION_INTERVAL,
            l2_block_time: L2_BLOCK_TIME,
            starting_block_number: STARTING_BLOCK_NUMBER,
            starting_timestamp,
            proposer,
            owner,
        }
    }
}
