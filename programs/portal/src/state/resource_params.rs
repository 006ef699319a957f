use alloy_primitives::{B256, U256};

use crate::{
    constants::{
        BASE_FEE_MAX_CHANGE_DENOMINATOR, DECAY_BLOCKS_PER_ITERATION, INITIAL_BASE_FEE,
        MAX_RESOURCE_LIMIT, MINIMUM_BASE_FEE, TARGET_RESOURCE_LIMIT,
    },
    internal::ResourceMeteringError,
};

/// EIP-1559 style market for the L2 gas bought by deposits and withdrawals.
///
/// Persisted as a single storage word: `prev_base_fee` in bits 0..128,
/// `prev_bought_gas` in bits 128..192 and `prev_block_num` in bits 192..256.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceParams {
    /// Base fee of the block `prev_block_num`, in wei per unit of gas
    pub prev_base_fee: u128,
    /// Gas bought so far in the block `prev_block_num`
    pub prev_bought_gas: u64,
    /// Last L1 block in which gas was bought
    pub prev_block_num: u64,
}

impl ResourceParams {
    /// Create the initial market state, starting at `block_number`
    pub fn new(block_number: u64) -> Self {
        Self {
            prev_base_fee: INITIAL_BASE_FEE,
            prev_bought_gas: 0,
            prev_block_num: block_number,
        }
    }

    pub fn pack(&self) -> B256 {
        let word = U256::from(self.prev_base_fee)
            | (U256::from(self.prev_bought_gas) << 128usize)
            | (U256::from(self.prev_block_num) << 192usize);
        B256::from(word.to_be_bytes::<32>())
    }

    pub fn unpack(word: B256) -> Self {
        let word = U256::from_be_bytes(word.0);
        Self {
            prev_base_fee: (word & U256::from(u128::MAX)).to::<u128>(),
            prev_bought_gas: ((word >> 128usize) & U256::from(u64::MAX)).to::<u64>(),
            prev_block_num: (word >> 192usize).to::<u64>(),
        }
    }

    /// Base fee that applies to purchases made in `current_block`
    pub fn base_fee_at(&self, current_block: u64) -> u128 {
        let block_diff = current_block.saturating_sub(self.prev_block_num);
        if block_diff == 0 {
            return self.prev_base_fee;
        }

        // The last block with purchases moves the fee towards the target
        let base_fee = calc_base_fee(self.prev_base_fee, self.prev_bought_gas);

        // Every block in between was empty
        decay_base_fee(base_fee, block_diff - 1)
    }

    /// Buy `amount` gas in `current_block`, returning the updated params.
    ///
    /// Fails without side effects when the block would go over `MAX_RESOURCE_LIMIT`.
    pub fn purchase(&self, amount: u64, current_block: u64) -> Result<Self, ResourceMeteringError> {
        let mut next = *self;
        if current_block > self.prev_block_num {
            next = Self {
                prev_base_fee: self.base_fee_at(current_block),
                prev_bought_gas: 0,
                prev_block_num: current_block,
            };
        }

        next.prev_bought_gas = next
            .prev_bought_gas
            .checked_add(amount)
            .filter(|bought| *bought <= MAX_RESOURCE_LIMIT)
            .ok_or(ResourceMeteringError::ResourceLimitExceeded)?;

        Ok(next)
    }
}

/// Calculate the base fee of the block following one in which `bought_gas` was bought
fn calc_base_fee(base_fee: u128, bought_gas: u64) -> u128 {
    let base_fee = U256::from(base_fee);
    let target = U256::from(TARGET_RESOURCE_LIMIT);
    let denominator = U256::from(BASE_FEE_MAX_CHANGE_DENOMINATOR);

    let next = if bought_gas >= TARGET_RESOURCE_LIMIT {
        // baseFee + baseFee * gasUsedDelta / target / denominator
        let gas_used_delta = U256::from(bought_gas - TARGET_RESOURCE_LIMIT);
        base_fee + base_fee * gas_used_delta / target / denominator
    } else {
        // baseFee - baseFee * gasUsedDelta / target / denominator
        let gas_used_delta = U256::from(TARGET_RESOURCE_LIMIT - bought_gas);
        base_fee.saturating_sub(base_fee * gas_used_delta / target / denominator)
    };

    clamp_base_fee(next)
}

/// Apply `empty_blocks` times the empty block update, i.e.
///
/// ```text
/// base_fee_n = base_fee_0 * [(denom - 1) / denom]^n
/// ```
///
/// in chunks of `DECAY_BLOCKS_PER_ITERATION` blocks, stopping as soon as the
/// minimum base fee is reached.
pub(crate) fn decay_base_fee(base_fee: u128, empty_blocks: u64) -> u128 {
    let numerator = U256::from(BASE_FEE_MAX_CHANGE_DENOMINATOR - 1);
    let denominator = U256::from(BASE_FEE_MAX_CHANGE_DENOMINATOR);
    let minimum = U256::from(MINIMUM_BASE_FEE);

    let mut base_fee = U256::from(base_fee);
    let mut remaining = empty_blocks;
    while remaining > 0 && base_fee > minimum {
        let blocks = remaining.min(DECAY_BLOCKS_PER_ITERATION);
        let exponent = U256::from(blocks);
        base_fee = base_fee * numerator.pow(exponent) / denominator.pow(exponent);
        remaining -= blocks;
    }

    clamp_base_fee(base_fee)
}

fn clamp_base_fee(base_fee: U256) -> u128 {
    base_fee.saturating_to::<u128>().max(MINIMUM_BASE_FEE)
}
