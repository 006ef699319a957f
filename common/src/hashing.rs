//! Hashing scheme shared by the L2 message passer and the L1 portal.

use alloy_primitives::{keccak256, B256, U256};
use alloy_sol_types::SolValue;

use crate::solidity::{OutputRootProof, WithdrawalTransaction};

/// Storage slot of the `sentMessages` mapping inside the L2 message passer.
pub const SENT_MESSAGES_SLOT: U256 = U256::ZERO;

/// Hashes a withdrawal as `keccak256(abi.encode(nonce, sender, target, value, gasLimit, data))`.
pub fn withdrawal_hash(tx: &WithdrawalTransaction) -> B256 {
    keccak256(tx.abi_encode_params())
}

/// Reconstructs the output root committed for an L2 block from its preimage.
pub fn output_root(proof: &OutputRootProof) -> B256 {
    let mut preimage = [0u8; 128];
    preimage[..32].copy_from_slice(proof.version.as_slice());
    preimage[32..64].copy_from_slice(proof.stateRoot.as_slice());
    preimage[64..96].copy_from_slice(proof.withdrawerStorageRoot.as_slice());
    preimage[96..].copy_from_slice(proof.latestBlockhash.as_slice());

    keccak256(preimage)
}

/// Location of `mapping[key]` for a Solidity mapping declared at `slot`.
pub fn mapping_slot(key: B256, slot: U256) -> B256 {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(key.as_slice());
    preimage[32..].copy_from_slice(&slot.to_be_bytes::<32>());

    keccak256(preimage)
}

/// Storage key under which the message passer records `sentMessages[withdrawal_hash] = true`.
pub fn withdrawal_storage_key(withdrawal_hash: B256) -> B256 {
    mapping_slot(withdrawal_hash, SENT_MESSAGES_SLOT)
}
