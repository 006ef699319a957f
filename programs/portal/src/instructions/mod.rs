pub mod initialize;
pub mod l1_to_l2;
pub mod l2_to_l1;

pub use initialize::*;
pub use l1_to_l2::*;
pub use l2_to_l1::*;
