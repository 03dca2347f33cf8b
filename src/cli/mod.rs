/// CLI layer: argument parsing and diagnostics.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{DebugTimer, init_tracing, write_error};
