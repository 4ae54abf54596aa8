pub mod commands;
pub mod output;
mod shell;

pub use commands::CliError;
pub use shell::run_cli;
