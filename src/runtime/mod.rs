mod error;
mod log;

pub use self::log::*;
pub use error::Error;
