pub mod finalize_withdrawal_transaction;

pub use finalize_withdrawal_transaction::*;
