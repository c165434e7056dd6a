pub mod listing;
pub mod repl_command;
