pub mod constants;
pub mod oracle;
pub mod state;

pub use oracle::*;
pub use state::*;
