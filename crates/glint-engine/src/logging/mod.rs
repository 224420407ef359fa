//! Global logger setup.

mod init;

pub use init::init_logging;
