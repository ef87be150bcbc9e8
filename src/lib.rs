pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{MusicScanError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit code for a command that failed with `error`.
#[must_use]
pub const fn exit_code_for(error: &MusicScanError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
