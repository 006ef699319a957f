use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolEvent;
use common::{alias::apply_l1_to_l2_alias, require};
use tracing::info;

use crate::{
    constants::DEPOSIT_VERSION,
    host::Host,
    internal::{min_deposit_gas_limit, ResourceMeteringError},
    solidity::TransactionDeposited,
};

/// An L1 to L2 transaction, as requested by the depositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositTransaction {
    /// Target address on L2, zero for contract creations
    pub to: Address,
    /// Value to send to `to` on L2
    pub value: U256,
    /// Gas limit of the L2 transaction, bought on L1
    pub gas_limit: u64,
    pub is_creation: bool,
    pub data: Bytes,
}

pub fn deposit_transaction_internal<H: Host + ?Sized>(
    host: &mut H,
    deposit: &DepositTransaction,
) -> Result<(), DepositTransactionError> {
    require!(
        !deposit.is_creation || deposit.to == Address::ZERO,
        DepositTransactionError::CreationWithNonZeroTarget
    );

    require!(
        deposit.gas_limit >= min_deposit_gas_limit(deposit.data.len()),
        DepositTransactionError::GasLimitTooLow
    );

    // Contracts get aliased so that they cannot impersonate the L2 account at
    // the same address
    let caller = host.caller();
    let from = if caller != host.origin() {
        apply_l1_to_l2_alias(caller)
    } else {
        caller
    };

    let mint = host.call_value();
    let event = TransactionDeposited {
        from,
        to: deposit.to,
        version: DEPOSIT_VERSION,
        opaqueData: opaque_data(mint, deposit),
    };
    host.emit(event.encode_log_data());

    info!(
        %from,
        to = %deposit.to,
        %mint,
        value = %deposit.value,
        gas_limit = deposit.gas_limit,
        "transaction deposited"
    );

    Ok(())
}

/// `abi.encodePacked(mint, value, gasLimit, isCreation, data)`
fn opaque_data(mint: U256, deposit: &DepositTransaction) -> Bytes {
    let mut opaque_data = Vec::with_capacity(32 + 32 + 8 + 1 + deposit.data.len());
    opaque_data.extend_from_slice(&mint.to_be_bytes::<32>());
    opaque_data.extend_from_slice(&deposit.value.to_be_bytes::<32>());
    opaque_data.extend_from_slice(&deposit.gas_limit.to_be_bytes());
    opaque_data.push(deposit.is_creation as u8);
    opaque_data.extend_from_slice(&deposit.data);
    opaque_data.into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DepositTransactionError {
    #[error("Creation with non-zero target")]
    CreationWithNonZeroTarget,
    #[error("Gas limit too low")]
    GasLimitTooLow,
    #[error(transparent)]
    Metering(#[from] ResourceMeteringError),
}
