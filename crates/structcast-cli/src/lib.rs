mod args;
mod commands;
pub mod logging;
pub mod sample;

pub use args::{Cli, OutputFormat};
pub use commands::run;
