use crate::{
    host::{atomically, Host},
    internal::{deposit_transaction_internal, metered, DepositTransaction, DepositTransactionError},
    Context,
};

/// Records an L1 to L2 transaction and buys its gas limit on the resource market.
pub fn deposit_transaction_handler<O, H>(
    ctx: Context<'_, O, H>,
    deposit: &DepositTransaction,
) -> Result<(), DepositTransactionError>
where
    O: ?Sized,
    H: Host + ?Sized,
{
    atomically(ctx.host, |host| {
        metered(host, deposit.gas_limit, |host| {
            deposit_transaction_internal(host, deposit)
        })
    })
}
