//! Inclusion proofs against the withdrawer storage trie.
//!
//! Storage tries are "secure" tries: the path of an entry is the keccak256 of
//! its key, and the leaf holds the RLP encoding of the stored word.

use alloy_primitives::{keccak256, Bytes, B256};
use alloy_trie::{proof::verify_proof, Nibbles};

pub use alloy_trie::proof::ProofVerificationError;

use crate::hashing::withdrawal_storage_key;

/// Leaf value written by the message passer for a sent withdrawal (`rlp(uint256(1))`).
pub const WITHDRAWAL_SENT_VALUE: [u8; 1] = [0x01];

/// Verifies that `key` maps to `value` in the secure trie committed by `root`.
///
/// `proof` lists the RLP-encoded trie nodes along the path, starting at the root.
pub fn verify_inclusion_proof(
    root: B256,
    key: &[u8],
    value: &[u8],
    proof: &[Bytes],
) -> Result<(), ProofVerificationError> {
    let path = Nibbles::unpack(keccak256(key));
    verify_proof(root, path, Some(value.to_vec()), proof)
}

/// Verifies that the withdrawal identified by `withdrawal_hash` was recorded
/// as sent in the withdrawer storage trie.
pub fn verify_withdrawal_inclusion(
    withdrawal_hash: B256,
    withdrawer_storage_root: B256,
    proof: &[Bytes],
) -> Result<(), ProofVerificationError> {
    let storage_key = withdrawal_storage_key(withdrawal_hash);
    verify_inclusion_proof(
        withdrawer_storage_root,
        storage_key.as_slice(),
        &WITHDRAWAL_SENT_VALUE,
        proof,
    )
}
