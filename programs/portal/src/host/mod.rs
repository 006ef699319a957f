//! The EVM environment the portal executes in.
//!
//! The portal never owns state: every read and write goes through a [`Host`],
//! which also provides the block context, the gas meter, log emission and
//! sub-calls. Hosts are journaled so that an entry point can undo everything
//! it did when it fails.

mod in_memory;

pub use in_memory::*;

use alloy_primitives::{Address, Bytes, LogData, B256, U256};

/// Journal position returned by [`Storage::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Word-addressed persistent storage of the portal account.
pub trait Storage {
    fn sload(&self, slot: B256) -> B256;

    fn sstore(&mut self, slot: B256, value: B256);

    /// Opens a nested journal frame.
    fn checkpoint(&mut self) -> Checkpoint;

    /// Undoes every state change (storage, balances, logs) made since `checkpoint`.
    fn revert(&mut self, checkpoint: Checkpoint);

    /// Closes the frame opened at `checkpoint`, keeping its changes.
    fn commit(&mut self, checkpoint: Checkpoint);
}

/// A message call made by the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    pub target: Address,
    pub value: U256,
    pub gas_limit: u64,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Out of gas")]
pub struct OutOfGas;

pub trait Host: Storage {
    /// Address of the portal itself.
    fn address(&self) -> Address;

    /// Immediate caller of the current entry point.
    fn caller(&self) -> Address;

    /// Externally-owned account that signed the transaction.
    fn origin(&self) -> Address;

    /// Value attached to the current entry point.
    fn call_value(&self) -> U256;

    fn block_number(&self) -> u64;

    fn timestamp(&self) -> u64;

    /// L1 base fee of the current block.
    fn base_fee(&self) -> U256;

    fn gas_left(&self) -> u64;

    /// Consumes `amount` gas. Running out consumes everything that is left.
    fn burn_gas(&mut self, amount: u64) -> Result<(), OutOfGas>;

    fn emit(&mut self, log: LogData);

    /// Calls `request.target`, forwarding at most `request.gas_limit` gas and
    /// `request.value` wei. A failing target is reported as `false` and has
    /// its own effects undone; it never aborts the caller.
    fn call(&mut self, request: CallRequest) -> bool;
}

/// Runs `op` in its own journal frame, reverting every state change it made
/// when it returns an error.
pub fn atomically<H, T, E>(host: &mut H, op: impl FnOnce(&mut H) -> Result<T, E>) -> Result<T, E>
where
    H: Storage + ?Sized,
{
    let checkpoint = host.checkpoint();
    match op(host) {
        Ok(output) => {
            host.commit(checkpoint);
            Ok(output)
        }
        Err(err) => {
            host.revert(checkpoint);
            Err(err)
        }
    }
}
