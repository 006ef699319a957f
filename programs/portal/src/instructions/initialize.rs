use alloy_primitives::B256;
use common::require;
use tracing::info;

use crate::{
    constants::DEFAULT_L2_SENDER,
    host::{atomically, Host},
    state::{store_l2_sender, store_resource_params, ResourceParams, RESOURCE_PARAMS_SLOT},
    Context,
};

pub fn initialize_handler<O, H>(ctx: Context<'_, O, H>) -> Result<(), InitializeError>
where
    O: ?Sized,
    H: Host + ?Sized,
{
    atomically(ctx.host, initialize)
}

fn initialize<H: Host + ?Sized>(host: &mut H) -> Result<(), InitializeError> {
    require!(
        host.sload(RESOURCE_PARAMS_SLOT) == B256::ZERO,
        InitializeError::AlreadyInitialized
    );

    let params = ResourceParams::new(host.block_number());
    store_resource_params(host, &params);
    store_l2_sender(host, DEFAULT_L2_SENDER);

    info!(block_number = params.prev_block_num, "portal initialized");

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InitializeError {
    #[error("Portal already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        constants::INITIAL_BASE_FEE,
        host::InMemoryHost,
        state::{load_l2_sender, load_resource_params, PortalConfig},
        test_utils::{empty_oracle, PORTAL},
    };

    #[test]
    fn test_initialize_success() {
        let config = PortalConfig::default();
        let oracle = empty_oracle();
        let mut host = InMemoryHost::new(PORTAL);
        host.set_block_number(1_234);

        let result = initialize_handler(Context::new(&config, &oracle, &mut host));

        assert_eq!(result, Ok(()));
        let params = load_resource_params(&host);
        assert_eq!(params.prev_base_fee, INITIAL_BASE_FEE);
        assert_eq!(params.prev_bought_gas, 0);
        assert_eq!(params.prev_block_num, 1_234);
        assert_eq!(load_l2_sender(&host), DEFAULT_L2_SENDER);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let config = PortalConfig::default();
        let oracle = empty_oracle();
        let mut host = InMemoryHost::new(PORTAL);
        initialize_handler(Context::new(&config, &oracle, &mut host)).unwrap();

        // Initializing again in a later block must not reset the market
        host.advance_blocks(10);
        let result = initialize_handler(Context::new(&config, &oracle, &mut host));

        assert_eq!(result, Err(InitializeError::AlreadyInitialized));
        assert_eq!(load_resource_params(&host).prev_block_num, 1);
    }
}
