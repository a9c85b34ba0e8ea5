//! CLI module for listexamples
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{is_argument_count_error, usage_message, Cli};
pub use setup::{init_logging, level_for_verbosity};
