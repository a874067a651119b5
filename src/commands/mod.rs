// src/commands/mod.rs
//! Command handlers for the rpmlog CLI

mod parse;
mod query;
mod source;

pub use parse::{cmd_parse, cmd_scan};
pub use query::{cmd_operations, cmd_query};
pub use source::read_line;
