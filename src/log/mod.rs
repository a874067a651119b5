// src/log/mod.rs

//! Transaction log line parsing

pub mod format;
pub mod parser;

pub use format::{LogAction, LogFormat};
pub use parser::{LineParser, LogEntry, ParserConfig, decompose_nevra};
