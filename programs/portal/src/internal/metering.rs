use alloy_primitives::U256;
use tracing::debug;

use crate::{
    constants::MINIMUM_L1_BASE_FEE,
    host::Host,
    state::{load_resource_params, store_resource_params},
};

/// Runs `op` and then charges for the `amount` of L2 gas it bought.
///
/// The price is paid by burning L1 gas: `amount * base_fee / l1_base_fee`,
/// minus whatever `op` already consumed. Nothing is charged when `op` fails.
pub fn metered<H, T, E>(
    host: &mut H,
    amount: u64,
    op: impl FnOnce(&mut H) -> Result<T, E>,
) -> Result<T, E>
where
    H: Host + ?Sized,
    E: From<ResourceMeteringError>,
{
    let initial_gas = host.gas_left();

    let output = op(host)?;
    charge_resources(host, amount, initial_gas)?;

    Ok(output)
}

fn charge_resources<H: Host + ?Sized>(
    host: &mut H,
    amount: u64,
    initial_gas: u64,
) -> Result<(), ResourceMeteringError> {
    let params = load_resource_params(host).purchase(amount, host.block_number())?;
    store_resource_params(host, &params);

    let resource_cost = U256::from(amount) * U256::from(params.prev_base_fee);
    let l1_base_fee = host.base_fee().max(U256::from(MINIMUM_L1_BASE_FEE));
    let gas_cost = resource_cost / l1_base_fee;

    let used_gas = U256::from(initial_gas.saturating_sub(host.gas_left()));
    let gas_to_burn = gas_cost.saturating_sub(used_gas).saturating_to::<u64>();

    debug!(
        amount,
        base_fee = params.prev_base_fee,
        gas_to_burn,
        "resources charged"
    );

    host.burn_gas(gas_to_burn)
        .map_err(|_| ResourceMeteringError::OutOfGas)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResourceMeteringError {
    #[error("Cannot buy more gas than available gas limit")]
    ResourceLimitExceeded,
    #[error("Out of gas")]
    OutOfGas,
}
