//! Logger initialization.
//!
//! Library code only talks to the `log` facade; applications, tests and
//! benches call [`init_logging`] once to install `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
