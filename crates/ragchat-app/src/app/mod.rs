pub mod commands;
pub mod repl;
pub mod setup;

pub use commands::run_command;
pub use repl::{run_repl_mode, ReplCommand};
pub use setup::setup_from_cli;
