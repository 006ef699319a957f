pub mod config;
pub mod layout;
pub mod resource_params;

pub use config::*;
pub use layout::*;
pub use resource_params::*;
