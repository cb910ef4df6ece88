pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{process_file, run, validate_file};
