//! L1 → L2 address aliasing.
//!
//! Contracts on L1 and L2 may share an address without sharing code. Deposits
//! sent by an L1 contract are attributed on L2 to its address shifted by a
//! constant offset, wrapping modulo 2^160.

use alloy_primitives::{address, aliases::U160, Address};

/// Offset added to an L1 contract address to obtain its L2 alias.
pub const ALIAS_OFFSET: Address = address!("1111000000000000000000000000000000001111");

fn to_uint(address: Address) -> U160 {
    U160::from_be_bytes(address.0 .0)
}

fn from_uint(value: U160) -> Address {
    Address::from(value.to_be_bytes::<20>())
}

/// Returns the L2 alias of an L1 contract address.
pub fn apply_l1_to_l2_alias(l1_address: Address) -> Address {
    from_uint(to_uint(l1_address).wrapping_add(to_uint(ALIAS_OFFSET)))
}

/// Recovers the L1 address from its L2 alias.
pub fn undo_l1_to_l2_alias(l2_address: Address) -> Address {
    from_uint(to_uint(l2_address).wrapping_sub(to_uint(ALIAS_OFFSET)))
}
