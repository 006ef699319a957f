use alloy_primitives::Bytes;

use crate::{
    constants::RECEIVE_DEFAULT_GAS_LIMIT,
    host::Host,
    internal::{DepositTransaction, DepositTransactionError},
    Context,
};

use super::deposit_transaction_handler;

pub fn receive_handler<O, H>(ctx: Context<'_, O, H>) -> Result<(), DepositTransactionError>
where
    O: ?Sized,
    H: Host + ?Sized,
{
    let deposit = DepositTransaction {
        to: ctx.host.caller(),
        value: ctx.host.call_value(),
        gas_limit: RECEIVE_DEFAULT_GAS_LIMIT,
        is_creation: false,
        data: Bytes::new(),
    };

    deposit_transaction_handler(ctx, &deposit)
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy_primitives::U256;
    use alloy_sol_types::SolEvent;

    use crate::{
        solidity::TransactionDeposited,
        test_utils::{setup_portal, ALICE},
    };

    #[test]
    fn test_receive_deposits_to_sender() {
        let (portal, mut host) = setup_portal();
        host.set_call_value(U256::from(42));

        portal.receive(&mut host).unwrap();

        let event = TransactionDeposited::decode_log_data(&host.logs()[0].data, true).unwrap();
        assert_eq!(event.from, ALICE);
        assert_eq!(event.to, ALICE);

        let mut opaque_data = Vec::new();
        opaque_data.extend_from_slice(&U256::from(42).to_be_bytes::<32>());
        opaque_data.extend_from_slice(&U256::from(42).to_be_bytes::<32>());
        opaque_data.extend_from_slice(&RECEIVE_DEFAULT_GAS_LIMIT.to_be_bytes());
        opaque_data.push(0);
        assert_eq!(event.opaqueData.as_ref(), opaque_data.as_slice());
        assert_eq!(
            portal.params(&host).prev_bought_gas,
            RECEIVE_DEFAULT_GAS_LIMIT
        );
    }
}
