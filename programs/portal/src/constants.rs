use alloy_primitives::{Address, U256};
use hex_literal::hex;

// Portal constants

/// Value of the L2 sender slot while no withdrawal is executing.
pub const DEFAULT_L2_SENDER: Address = Address::new(hex!("000000000000000000000000000000000000dEaD"));

/// Version of the `TransactionDeposited` opaque data layout.
pub const DEPOSIT_VERSION: U256 = U256::ZERO;

/// Gas limit of the deposit created by a plain value transfer to the portal.
pub const RECEIVE_DEFAULT_GAS_LIMIT: u64 = 100_000;

pub const BASE_TRANSACTION_COST: u64 = 21_000;

pub const GAS_PER_BYTE_COST: u64 = 16;

#[cfg(feature = "devnet")]
pub const FINALIZATION_PERIOD_SECONDS: u64 = 2;

#[cfg(not(feature = "devnet"))]
pub const FINALIZATION_PERIOD_SECONDS: u64 = 7 * 24 * 60 * 60; // 7 days

// Resource metering constants

pub const ELASTICITY_MULTIPLIER: u64 = 2;

pub const MAX_RESOURCE_LIMIT: u64 = 30_000_000;

pub const TARGET_RESOURCE_LIMIT: u64 = MAX_RESOURCE_LIMIT / ELASTICITY_MULTIPLIER;

pub const BASE_FEE_MAX_CHANGE_DENOMINATOR: u64 = 8;

pub const MINIMUM_BASE_FEE: u128 = 10_000;

pub const INITIAL_BASE_FEE: u128 = 1_000_000_000; // 1 GWEI

/// Floor applied to the L1 base fee when converting resource cost to gas.
pub const MINIMUM_L1_BASE_FEE: u64 = 1_000_000_000; // 1 GWEI

/// Empty blocks folded into a single decay step. `7^40 < 2^113`, so
/// `fee * 7^40` never overflows 256 bits for a 128-bit fee.
pub const DECAY_BLOCKS_PER_ITERATION: u64 = 40;

/// Decay iterations needed to bring `u128::MAX` down to `MINIMUM_BASE_FEE`.
pub const MAX_DECAY_ITERATIONS: u64 = 15;

// EVM gas schedule used to bound the cost of finalization

pub const COLD_ACCOUNT_ACCESS_GAS: u64 = 2_600;

pub const CALL_VALUE_TRANSFER_GAS: u64 = 9_000;

pub const CALL_NEW_ACCOUNT_GAS: u64 = 25_000;

pub const COLD_SLOAD_GAS: u64 = 2_100;

pub const SSTORE_RESET_GAS: u64 = 2_900;

pub const LOG_GAS: u64 = 375;

pub const LOG_TOPIC_GAS: u64 = 375;

pub const LOG_DATA_GAS: u64 = 8;

pub const DECAY_ITERATION_GAS: u64 = 200;
