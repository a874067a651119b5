// src/commands/query.rs

//! `rpmlog query` and `rpmlog operations`

use super::read_line;
use crate::cli::LineArgs;
use anyhow::Result;
use rpmlog::presenter::{Presenter, WriterPresenter};
use rpmlog::{Config, LineParser, Operation, Reviewer};
use std::path::Path;
use tracing::{info, warn};

/// Run one operation for the package on the selected log line
pub fn cmd_query(
    config: &Config,
    operation: &str,
    source: &LineArgs,
    output: Option<&Path>,
) -> Result<()> {
    let operation = Operation::parse(operation)?;
    let line = read_line(source)?;

    let rpm = config.rpm_command();
    if !rpm.is_available() {
        warn!("{} not found in PATH", rpm.program.display());
    }

    let reviewer = Reviewer::new(LineParser::new(config.parser_config()), rpm);
    let mut presenter: Box<dyn Presenter> = match output {
        Some(path) => Box::new(WriterPresenter::create(path)?),
        None => Box::new(WriterPresenter::stdout()),
    };

    let outcome = reviewer.review(&line, operation, presenter.as_mut())?;
    info!(
        "{} for {}: {} line(s)",
        operation, outcome.specifier, outcome.lines
    );

    if let Some(path) = output {
        println!("Wrote {} line(s) to {}", outcome.lines, path.display());
    }
    Ok(())
}

/// List the available operations
pub fn cmd_operations() -> Result<()> {
    for op in Operation::all() {
        println!("  {:<12} {:<14} {}", op.as_ref(), op.flag(), op.description());
    }
    Ok(())
}
