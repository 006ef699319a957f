use std::{collections::BTreeMap, rc::Rc, sync::Arc};

use alloy_primitives::{Address, B256};
use common::require;
use tracing::info;

use crate::state::{OutputOracleConfig, OutputProposal};

/// Read access to committed L2 output roots.
pub trait OutputOracle {
    /// Returns the output committed for `l2_block_number`, if any.
    fn get_l2_output(&self, l2_block_number: u64) -> Option<OutputProposal>;
}

impl<T: OutputOracle + ?Sized> OutputOracle for &T {
    fn get_l2_output(&self, l2_block_number: u64) -> Option<OutputProposal> {
        (**self).get_l2_output(l2_block_number)
    }
}

impl<T: OutputOracle + ?Sized> OutputOracle for Box<T> {
    fn get_l2_output(&self, l2_block_number: u64) -> Option<OutputProposal> {
        (**self).get_l2_output(l2_block_number)
    }
}

impl<T: OutputOracle + ?Sized> OutputOracle for Rc<T> {
    fn get_l2_output(&self, l2_block_number: u64) -> Option<OutputProposal> {
        (**self).get_l2_output(l2_block_number)
    }
}

impl<T: OutputOracle + ?Sized> OutputOracle for Arc<T> {
    fn get_l2_output(&self, l2_block_number: u64) -> Option<OutputProposal> {
        (**self).get_l2_output(l2_block_number)
    }
}

/// Append-only list of output roots, one every `submission_interval` L2 blocks.
#[derive(Debug, Clone)]
pub struct L2OutputOracle {
    config: OutputOracleConfig,
    outputs: BTreeMap<u64, OutputProposal>,
    latest_block_number: u64,
}

impl L2OutputOracle {
    pub fn new(config: OutputOracleConfig) -> Self {
        let latest_block_number = config.starting_block_number;
        Self {
            config,
            outputs: BTreeMap::new(),
            latest_block_number,
        }
    }

    pub fn config(&self) -> &OutputOracleConfig {
        &self.config
    }

    /// L2 block of the most recent proposal, or the starting block before any.
    pub fn latest_block_number(&self) -> u64 {
        self.latest_block_number
    }

    /// The only L2 block the next proposal may be made for.
    pub fn next_block_number(&self) -> u64 {
        self.latest_block_number
            .saturating_add(self.config.submission_interval)
    }

    /// Timestamp of an L2 block, derived from the genesis timestamp and block time.
    pub fn compute_l2_timestamp(&self, l2_block_number: u64) -> u64 {
        let elapsed_blocks = l2_block_number.saturating_sub(self.config.starting_block_number);
        self.config
            .starting_timestamp
            .saturating_add(elapsed_blocks.saturating_mul(self.config.l2_block_time))
    }

    /// Commits `output_root` for `l2_block_number` at L1 time `now`.
    pub fn propose_l2_output(
        &mut self,
        proposer: Address,
        output_root: B256,
        l2_block_number: u64,
        now: u64,
    ) -> Result<(), OutputOracleError> {
        require!(
            proposer == self.config.proposer,
            OutputOracleError::Unauthorized
        );

        let expected = self.next_block_number();
        require!(
            l2_block_number == expected,
            OutputOracleError::UnexpectedBlockNumber {
                expected,
                got: l2_block_number
            }
        );

        require!(
            self.compute_l2_timestamp(l2_block_number) < now,
            OutputOracleError::BlockNumberInFuture
        );

        require!(
            output_root != B256::ZERO,
            OutputOracleError::EmptyOutputRoot
        );

        // Committed outputs are never overwritten, even with a zero submission interval
        require!(
            !self.outputs.contains_key(&l2_block_number),
            OutputOracleError::OutputAlreadyProposed
        );

        self.outputs.insert(
            l2_block_number,
            OutputProposal {
                output_root,
                timestamp: now,
            },
        );
        self.latest_block_number = l2_block_number;

        info!(l2_block_number, %output_root, timestamp = now, "output proposed");

        Ok(())
    }

    /// Removes the latest output, e.g. after it was found to be invalid.
    pub fn delete_l2_output(
        &mut self,
        caller: Address,
        l2_block_number: u64,
    ) -> Result<OutputProposal, OutputOracleError> {
        require!(caller == self.config.owner, OutputOracleError::Unauthorized);

        require!(
            l2_block_number == self.latest_block_number,
            OutputOracleError::OnlyLatestDeletable
        );

        let proposal = self
            .outputs
            .remove(&l2_block_number)
            .ok_or(OutputOracleError::UnknownOutput)?;
        self.latest_block_number = l2_block_number - self.config.submission_interval;

        info!(l2_block_number, output_root = %proposal.output_root, "output deleted");

        Ok(proposal)
    }
}

impl OutputOracle for L2OutputOracle {
    fn get_l2_output(&self, l2_block_number: u64) -> Option<OutputProposal> {
        self.outputs.get(&l2_block_number).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutputOracleError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Unexpected L2 block number: expected {expected}, got {got}")]
    UnexpectedBlockNumber { expected: u64, got: u64 },
    #[error("Cannot propose an output for a future L2 block")]
    BlockNumberInFuture,
    #[error("Output root cannot be empty")]
    EmptyOutputRoot,
    #[error("An output was already proposed for this L2 block")]
    OutputAlreadyProposed,
    #[error("Only the latest output can be deleted")]
    OnlyLatestDeletable,
    #[error("Unknown output")]
    UnknownOutput,
}
