//! Subcommand implementations

pub mod eval;
pub mod info;
pub mod repl;
