pub mod alias;
pub mod hashing;
pub mod macros;
pub mod solidity;
pub mod trie;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use solidity::{OutputRootProof, WithdrawalTransaction};
