//! Builders for withdrawer storage tries and their inclusion proofs.

use std::collections::BTreeSet;

use alloy_primitives::{keccak256, Bytes, B256};
use alloy_trie::{proof::ProofRetainer, HashBuilder, Nibbles};

use crate::{
    hashing::{withdrawal_hash, withdrawal_storage_key},
    solidity::WithdrawalTransaction,
    trie::WITHDRAWAL_SENT_VALUE,
};

/// The storage trie of an L2 message passer that has sent a set of withdrawals.
#[derive(Debug, Default, Clone)]
pub struct WithdrawalTrie {
    paths: BTreeSet<Nibbles>,
}

impl WithdrawalTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_hashes(hashes: impl IntoIterator<Item = B256>) -> Self {
        let mut trie = Self::new();
        for hash in hashes {
            trie.insert_hash(hash);
        }
        trie
    }

    /// Records `withdrawal` as sent and returns its hash.
    pub fn insert(&mut self, withdrawal: &WithdrawalTransaction) -> B256 {
        let hash = withdrawal_hash(withdrawal);
        self.insert_hash(hash);
        hash
    }

    pub fn insert_hash(&mut self, withdrawal_hash: B256) {
        self.paths.insert(Self::path(withdrawal_hash));
    }

    /// Root of the trie, i.e. the withdrawer storage root.
    pub fn root(&self) -> B256 {
        self.build(None).0
    }

    /// Trie nodes from the root down to the leaf of `withdrawal_hash`.
    pub fn proof(&self, withdrawal_hash: B256) -> Vec<Bytes> {
        self.build(Some(Self::path(withdrawal_hash))).1
    }

    fn path(withdrawal_hash: B256) -> Nibbles {
        Nibbles::unpack(keccak256(withdrawal_storage_key(withdrawal_hash)))
    }

    fn build(&self, target: Option<Nibbles>) -> (B256, Vec<Bytes>) {
        let retainer = ProofRetainer::from_iter(target.clone());
        let mut builder = HashBuilder::default().with_proof_retainer(retainer);

        // `paths` is ordered, which is what the builder requires.
        for path in &self.paths {
            builder.add_leaf(path.clone(), &WITHDRAWAL_SENT_VALUE);
        }

        let root = builder.root();
        let proof = match target {
            Some(target) => builder
                .take_proof_nodes()
                .matching_nodes_sorted(&target)
                .into_iter()
                .map(|(_, node)| node)
                .collect(),
            None => Vec::new(),
        };

        (root, proof)
    }
}
