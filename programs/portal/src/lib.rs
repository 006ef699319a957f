//! L1 side of an optimistic rollup bridge.
//!
//! Deposits are recorded as `TransactionDeposited` events for the rollup node
//! to pick up. Withdrawals are executed once they are proven against an
//! output root that has outlived the finalization period. Both buy L2 gas on
//! an EIP-1559 style market, paid for by burning L1 gas.

pub mod constants;
pub mod host;
pub mod instructions;
pub mod internal;
pub mod solidity;
pub mod state;

#[cfg(test)]
mod test_utils;

use alloy_primitives::{Address, B256};
use output_oracle::OutputOracle;

use host::Host;
use instructions::*;
use state::{
    is_withdrawal_finalized, load_l2_sender, load_resource_params, PortalConfig, ResourceParams,
};

/// Everything an instruction handler can touch.
pub struct Context<'a, O: ?Sized, H: ?Sized> {
    pub config: &'a PortalConfig,
    pub oracle: &'a O,
    pub host: &'a mut H,
}

impl<'a, O: ?Sized, H: ?Sized> Context<'a, O, H> {
    pub fn new(config: &'a PortalConfig, oracle: &'a O, host: &'a mut H) -> Self {
        Self {
            config,
            oracle,
            host,
        }
    }
}

/// The portal contract. Holds no state of its own: everything persistent
/// lives in the storage of the [`Host`] passed to each call.
#[derive(Debug, Clone)]
pub struct Portal<O> {
    config: PortalConfig,
    oracle: O,
}

impl<O: OutputOracle> Portal<O> {
    pub fn new(config: PortalConfig, oracle: O) -> Self {
        Self { config, oracle }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    fn context<'a, H: Host + ?Sized>(&'a self, host: &'a mut H) -> Context<'a, O, H> {
        Context::new(&self.config, &self.oracle, host)
    }

    // Portal instructions

    pub fn initialize<H: Host + ?Sized>(&self, host: &mut H) -> Result<(), InitializeError> {
        initialize_handler(self.context(host))
    }

    pub fn deposit_transaction<H: Host + ?Sized>(
        &self,
        host: &mut H,
        deposit: &DepositTransaction,
    ) -> Result<(), DepositTransactionError> {
        deposit_transaction_handler(self.context(host), deposit)
    }

    /// Plain value transfer: deposits the attached value to the caller's own L2 address.
    pub fn receive<H: Host + ?Sized>(&self, host: &mut H) -> Result<(), DepositTransactionError> {
        receive_handler(self.context(host))
    }

    pub fn finalize_withdrawal_transaction<H: Host + ?Sized>(
        &self,
        host: &mut H,
        args: &FinalizeWithdrawalArgs,
    ) -> Result<bool, FinalizeWithdrawalError> {
        finalize_withdrawal_transaction_handler(self.context(host), args)
    }

    // Views

    pub fn params<H: Host + ?Sized>(&self, host: &H) -> ResourceParams {
        load_resource_params(host)
    }

    /// Sender of the withdrawal being executed, `DEFAULT_L2_SENDER` otherwise.
    pub fn l2_sender<H: Host + ?Sized>(&self, host: &H) -> Address {
        load_l2_sender(host)
    }

    pub fn is_finalized<H: Host + ?Sized>(&self, host: &H, withdrawal_hash: B256) -> bool {
        is_withdrawal_finalized(host, withdrawal_hash)
    }

    /// Whether withdrawals proven against the output of `l2_block_number` can
    /// be finalized now.
    pub fn is_output_finalized<H: Host + ?Sized>(&self, host: &H, l2_block_number: u64) -> bool {
        self.oracle
            .get_l2_output(l2_block_number)
            .is_some_and(|proposal| self.config.is_final(proposal.timestamp, host.timestamp()))
    }
}
