//! Campus navigation CLI library.
//!
//! Terminal styling, output formatting and the subcommand handlers used by
//! the `campusnav-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
