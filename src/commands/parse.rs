// src/commands/parse.rs

//! `rpmlog parse` and `rpmlog scan`

use super::read_line;
use crate::cli::LineArgs;
use anyhow::{Context, Result};
use rpmlog::{Config, LineParser, LogEntry};
use std::path::Path;
use tracing::warn;

/// Show the identity parsed from a single line
pub fn cmd_parse(config: &Config, source: &LineArgs, json: bool) -> Result<()> {
    let line = read_line(source)?;
    let entry = LineParser::new(config.parser_config()).parse_entry(&line)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    let id = &entry.identity;
    println!("Format:    {}", entry.format);
    println!("Action:    {}", entry.action);
    println!("Name:      {}", id.name);
    println!("Version:   {}", id.version.as_deref().unwrap_or("(none)"));
    println!("Arch:      {}", id.arch.as_deref().unwrap_or("(none)"));
    println!("Epoch:     {}", id.epoch.as_deref().unwrap_or("(none)"));
    println!("Specifier: {}", id.specifier());
    Ok(())
}

/// Parse each line of a log file independently
pub fn cmd_scan(config: &Config, file: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("read log file {}", file.display()))?;
    let parser = LineParser::new(config.parser_config());

    let mut parsed = 0usize;
    let mut skipped = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parser.parse_entry(line) {
            Ok(entry) => {
                parsed += 1;
                print_entry(lineno + 1, &entry, json)?;
            }
            Err(e) => {
                skipped += 1;
                warn!("{}:{}: {}", file.display(), lineno + 1, e);
            }
        }
    }

    if !json {
        println!("\nTotal: {} package(s), {} line(s) skipped", parsed, skipped);
    }
    Ok(())
}

fn print_entry(lineno: usize, entry: &LogEntry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(entry)?);
    } else {
        println!(
            "{:>6}  {:<11} {}",
            lineno,
            entry.action.to_string(),
            entry.identity
        );
    }
    Ok(())
}
