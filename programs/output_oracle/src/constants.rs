// Oracle constants

#[cfg(feature = "devnet")]
pub const SUBMISSION_INTERVAL: u64 = 20;

#[cfg(not(feature = "devnet"))]
pub const SUBMISSION_INTERVAL: u64 = 1_800;

pub const L2_BLOCK_TIME: u64 = 2;

pub const STARTING_BLOCK_NUMBER: u64 = 0;
