pub mod deposit;
pub mod gas;
pub mod metering;

pub use deposit::*;
pub use gas::*;
pub use metering::*;
