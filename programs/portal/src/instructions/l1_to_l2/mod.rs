pub mod deposit_transaction;
pub mod receive;

pub use deposit_transaction::*;
pub use receive::*;

pub use crate::internal::{DepositTransaction, DepositTransactionError};
