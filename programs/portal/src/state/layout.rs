//! Storage layout of the portal account.
//!
//! | slot | content |
//! |------|---------|
//! | 0    | L2 sender of the withdrawal being executed, `DEFAULT_L2_SENDER` otherwise |
//! | 1    | packed [`ResourceParams`] |
//! | 2    | `finalizedWithdrawals` mapping, `keccak256(withdrawalHash . uint256(2))` |
//! | 3    | `0x..01` while a withdrawal's target call executes, zero otherwise |

use alloy_primitives::{Address, B256, U256};
use common::hashing::mapping_slot;

use crate::{host::Storage, state::ResourceParams};

pub const L2_SENDER_SLOT: B256 = B256::ZERO;

pub const RESOURCE_PARAMS_SLOT: B256 = B256::with_last_byte(1);

pub const FINALIZED_WITHDRAWALS_SLOT: U256 = U256::from_limbs([2, 0, 0, 0]);

pub const IN_FLIGHT_SLOT: B256 = B256::with_last_byte(3);

const FINALIZED: B256 = B256::with_last_byte(1);

const IN_FLIGHT: B256 = B256::with_last_byte(1);

pub fn is_initialized<S: Storage + ?Sized>(storage: &S) -> bool {
    storage.sload(RESOURCE_PARAMS_SLOT) != B256::ZERO
}

pub fn load_resource_params<S: Storage + ?Sized>(storage: &S) -> ResourceParams {
    ResourceParams::unpack(storage.sload(RESOURCE_PARAMS_SLOT))
}

pub fn store_resource_params<S: Storage + ?Sized>(storage: &mut S, params: &ResourceParams) {
    storage.sstore(RESOURCE_PARAMS_SLOT, params.pack());
}

pub fn load_l2_sender<S: Storage + ?Sized>(storage: &S) -> Address {
    Address::from_word(storage.sload(L2_SENDER_SLOT))
}

pub fn store_l2_sender<S: Storage + ?Sized>(storage: &mut S, l2_sender: Address) {
    storage.sstore(L2_SENDER_SLOT, l2_sender.into_word());
}

pub fn is_in_flight<S: Storage + ?Sized>(storage: &S) -> bool {
    storage.sload(IN_FLIGHT_SLOT) != B256::ZERO
}

pub fn set_in_flight<S: Storage + ?Sized>(storage: &mut S, in_flight: bool) {
    let value = if in_flight { IN_FLIGHT } else { B256::ZERO };
    storage.sstore(IN_FLIGHT_SLOT, value);
}

pub fn finalized_withdrawal_slot(withdrawal_hash: B256) -> B256 {
    mapping_slot(withdrawal_hash, FINALIZED_WITHDRAWALS_SLOT)
}

pub fn is_withdrawal_finalized<S: Storage + ?Sized>(storage: &S, withdrawal_hash: B256) -> bool {
    storage.sload(finalized_withdrawal_slot(withdrawal_hash)) != B256::ZERO
}

pub fn mark_withdrawal_finalized<S: Storage + ?Sized>(storage: &mut S, withdrawal_hash: B256) {
    storage.sstore(finalized_withdrawal_slot(withdrawal_hash), FINALIZED);
}
