use crate::constants::{
    BASE_TRANSACTION_COST, CALL_NEW_ACCOUNT_GAS, CALL_VALUE_TRANSFER_GAS, COLD_ACCOUNT_ACCESS_GAS,
    COLD_SLOAD_GAS, DECAY_ITERATION_GAS, GAS_PER_BYTE_COST, LOG_DATA_GAS, LOG_GAS, LOG_TOPIC_GAS,
    MAX_DECAY_ITERATIONS, SSTORE_RESET_GAS,
};

/// Worst case cost of the target call itself, on top of the gas it forwards.
pub const CALL_OVERHEAD_GAS: u64 =
    COLD_ACCOUNT_ACCESS_GAS + CALL_VALUE_TRANSFER_GAS + CALL_NEW_ACCOUNT_GAS;

/// Worst case cost of everything finalization does after the target call
/// returns: restoring the L2 sender, clearing the in-flight marker, emitting
/// `WithdrawalFinalized` and updating the resource market.
pub const POST_CALL_GAS: u64 = {
    const RESTORE_L2_SENDER: u64 = COLD_SLOAD_GAS + SSTORE_RESET_GAS;
    // Already warm, it was set right before the call
    const CLEAR_IN_FLIGHT: u64 = SSTORE_RESET_GAS;
    // LOG2 with a single 32 byte data word
    const EMIT_FINALIZED: u64 = LOG_GAS + 2 * LOG_TOPIC_GAS + 32 * LOG_DATA_GAS;
    const UPDATE_RESOURCE_PARAMS: u64 =
        COLD_SLOAD_GAS + SSTORE_RESET_GAS + MAX_DECAY_ITERATIONS * DECAY_ITERATION_GAS;

    RESTORE_L2_SENDER + CLEAR_IN_FLIGHT + EMIT_FINALIZED + UPDATE_RESOURCE_PARAMS
};

/// Gas that must be left before calling the target of a withdrawal with
/// `gas_limit`, so that the target receives the full `gas_limit` despite the
/// 63/64 forwarding rule and finalization can still complete afterwards.
pub fn min_gas_to_finalize(gas_limit: u64) -> u64 {
    gas_limit
        .saturating_add(gas_limit.div_ceil(63))
        .saturating_add(CALL_OVERHEAD_GAS)
        .saturating_add(POST_CALL_GAS)
}

/// Smallest gas limit a deposit carrying `data_len` bytes of calldata may request.
pub fn min_deposit_gas_limit(data_len: usize) -> u64 {
    (data_len as u64)
        .saturating_mul(GAS_PER_BYTE_COST)
        .saturating_add(BASE_TRANSACTION_COST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overheads() {
        assert_eq!(CALL_OVERHEAD_GAS, 36_600);
        assert_eq!(POST_CALL_GAS, 5_000 + 2_900 + 1_381 + 8_000);
    }

    #[test]
    fn test_min_gas_to_finalize_zero_limit() {
        assert_eq!(min_gas_to_finalize(0), CALL_OVERHEAD_GAS + POST_CALL_GAS);
    }

    #[test]
    fn test_min_gas_to_finalize_covers_forwarding_loss() {
        for gas_limit in [1, 62, 63, 64, 100_000, 1_000_000, 30_000_000] {
            let available = min_gas_to_finalize(gas_limit) - CALL_OVERHEAD_GAS - POST_CALL_GAS;

            // The target must receive the whole gas limit
            assert!(available - available / 64 >= gas_limit, "gas_limit={gas_limit}");
        }
    }

    #[test]
    fn test_min_gas_to_finalize_exact() {
        assert_eq!(
            min_gas_to_finalize(63_000),
            63_000 + 1_000 + CALL_OVERHEAD_GAS + POST_CALL_GAS
        );
    }

    #[test]
    fn test_min_gas_to_finalize_saturates() {
        assert_eq!(min_gas_to_finalize(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_min_deposit_gas_limit() {
        assert_eq!(min_deposit_gas_limit(0), 21_000);
        assert_eq!(min_deposit_gas_limit(100), 22_600);
    }
}
