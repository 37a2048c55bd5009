#![allow(unused)]
//! Helper functions and types to make setting up the tests easier.

use log::LevelFilter;
use simple_logger::SimpleLogger;

pub mod test_types;

/// Installs a [`SimpleLogger`] at `level`.
///
/// Every test in a binary may call this; only the first call installs the logger.
pub fn init_logger(level: LevelFilter) {
    let _ = SimpleLogger::new().with_level(level).init();
}
