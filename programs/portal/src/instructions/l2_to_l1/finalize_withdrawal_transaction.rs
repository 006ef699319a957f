use alloy_primitives::Bytes;
use alloy_sol_types::SolEvent;
use common::{
    hashing::{output_root, withdrawal_hash},
    require,
    trie::verify_withdrawal_inclusion,
    OutputRootProof, WithdrawalTransaction,
};
use output_oracle::OutputOracle;
use tracing::{debug, info, warn};

use crate::{
    constants::DEFAULT_L2_SENDER,
    host::{atomically, CallRequest, Host},
    internal::{metered, min_gas_to_finalize, ResourceMeteringError},
    solidity::WithdrawalFinalized,
    state::{
        is_in_flight, is_initialized, is_withdrawal_finalized, mark_withdrawal_finalized,
        set_in_flight, store_l2_sender, PortalConfig,
    },
    Context,
};

/// Everything needed to prove and execute a withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeWithdrawalArgs {
    pub tx: WithdrawalTransaction,
    /// L2 block of the output root the withdrawal is proven against
    pub l2_block_number: u64,
    /// Preimage of that output root
    pub output_root_proof: OutputRootProof,
    /// Trie nodes from the withdrawer storage root down to the withdrawal entry
    pub withdrawal_proof: Vec<Bytes>,
}

/// Executes a withdrawal sent from L2, once its output root is final.
///
/// Returns whether the call to the target succeeded. A failing target still
/// finalizes the withdrawal, which can then never be replayed.
pub fn finalize_withdrawal_transaction_handler<O, H>(
    ctx: Context<'_, O, H>,
    args: &FinalizeWithdrawalArgs,
) -> Result<bool, FinalizeWithdrawalError>
where
    O: OutputOracle + ?Sized,
    H: Host + ?Sized,
{
    let Context {
        config,
        oracle,
        host,
    } = ctx;

    // Gas limits that do not fit are caught by the gas check before any gas is bought
    let gas_limit = args.tx.gasLimit.saturating_to::<u64>();

    atomically(host, |host| {
        metered(host, gas_limit, |host| {
            finalize_withdrawal_transaction(config, oracle, host, args)
        })
    })
}

fn finalize_withdrawal_transaction<O, H>(
    config: &PortalConfig,
    oracle: &O,
    host: &mut H,
    args: &FinalizeWithdrawalArgs,
) -> Result<bool, FinalizeWithdrawalError>
where
    O: OutputOracle + ?Sized,
    H: Host + ?Sized,
{
    let tx = &args.tx;

    require!(is_initialized(host), FinalizeWithdrawalError::NotInitialized);

    // The portal must never call itself
    require!(
        tx.target != host.address(),
        FinalizeWithdrawalError::SelfCallRejected
    );

    // Kept apart from the L2 sender, which may hold any address during the call
    require!(!is_in_flight(host), FinalizeWithdrawalError::ReentrancyRejected);

    let proposal = oracle
        .get_l2_output(args.l2_block_number)
        .ok_or(FinalizeWithdrawalError::UnknownCheckpoint)?;

    require!(
        config.is_final(proposal.timestamp, host.timestamp()),
        FinalizeWithdrawalError::NotYetFinal
    );

    require!(
        output_root(&args.output_root_proof) == proposal.output_root,
        FinalizeWithdrawalError::InvalidOutputRootProof
    );

    let withdrawal_hash = withdrawal_hash(tx);
    verify_withdrawal_inclusion(
        withdrawal_hash,
        args.output_root_proof.withdrawerStorageRoot,
        &args.withdrawal_proof,
    )
    .map_err(|err| {
        debug!(%withdrawal_hash, %err, "withdrawal inclusion proof rejected");
        FinalizeWithdrawalError::InvalidWithdrawalInclusionProof
    })?;

    require!(
        !is_withdrawal_finalized(host, withdrawal_hash),
        FinalizeWithdrawalError::AlreadyFinalized
    );

    let gas_limit = u64::try_from(tx.gasLimit)
        .map_err(|_| FinalizeWithdrawalError::InsufficientGas)?;
    require!(
        host.gas_left() >= min_gas_to_finalize(gas_limit),
        FinalizeWithdrawalError::InsufficientGas
    );

    // Marked before the call so that the target cannot replay it
    mark_withdrawal_finalized(host, withdrawal_hash);

    set_in_flight(host, true);
    store_l2_sender(host, tx.sender);
    let success = host.call(CallRequest {
        target: tx.target,
        value: tx.value,
        gas_limit,
        data: tx.data.clone(),
    });
    store_l2_sender(host, DEFAULT_L2_SENDER);
    set_in_flight(host, false);

    let event = WithdrawalFinalized {
        withdrawalHash: withdrawal_hash,
        success,
    };
    host.emit(event.encode_log_data());

    if success {
        info!(%withdrawal_hash, target = %tx.target, "withdrawal finalized");
    } else {
        warn!(%withdrawal_hash, target = %tx.target, "withdrawal finalized but target call failed");
    }

    Ok(success)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FinalizeWithdrawalError {
    #[error("Portal is not initialized")]
    NotInitialized,
    #[error("Withdrawal cannot target the portal")]
    SelfCallRejected,
    #[error("Withdrawal is already being executed")]
    ReentrancyRejected,
    #[error("No output root committed for this L2 block")]
    UnknownCheckpoint,
    #[error("Output root is not yet finalized")]
    NotYetFinal,
    #[error("Invalid output root proof")]
    InvalidOutputRootProof,
    #[error("Invalid withdrawal inclusion proof")]
    InvalidWithdrawalInclusionProof,
    #[error("Withdrawal has already been finalized")]
    AlreadyFinalized,
    #[error("Insufficient gas to finalize withdrawal")]
    InsufficientGas,
    #[error(transparent)]
    Metering(#[from] ResourceMeteringError),
}
