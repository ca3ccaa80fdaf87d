mod command;
pub mod core;

pub use command::PullClustersCMD;
pub use command::{DEFAULT_EXTENSION, DEFAULT_NUM_CORES};
