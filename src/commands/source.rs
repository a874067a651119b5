// src/commands/source.rs

//! Picking the log line a command works on

use crate::cli::LineArgs;
use anyhow::{Context, Result, bail};
use std::io::BufRead;

/// Resolve `--line`, `--file [--line-number N | --last]` or stdin to one line
pub fn read_line(args: &LineArgs) -> Result<String> {
    if let Some(line) = &args.line {
        return Ok(line.clone());
    }

    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read log file {}", path.display()))?;
        return select_line(&text, args)
            .with_context(|| format!("select line from {}", path.display()));
    }

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read log line from stdin")?;
    if line.trim().is_empty() {
        bail!("no log line given (use --line, --file or stdin)");
    }
    Ok(line.trim_end().to_string())
}

fn select_line(text: &str, args: &LineArgs) -> Result<String> {
    if let Some(number) = args.line_number {
        if number == 0 {
            bail!("line numbers start at 1");
        }
        return text
            .lines()
            .nth(number - 1)
            .map(str::to_string)
            .with_context(|| format!("file has fewer than {} lines", number));
    }

    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let picked = if args.last { lines.last() } else { lines.next() };
    picked.map(str::to_string).context("file is empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "\
2018-12-23T15:46:33Z SUBDEBUG Upgraded: a-1.0-1.fc29.x86_64
2018-12-23T15:46:34Z SUBDEBUG Upgraded: b-2.0-1.fc29.x86_64

";

    #[test]
    fn test_select_by_number() {
        let args = LineArgs {
            line_number: Some(2),
            ..Default::default()
        };
        assert!(select_line(LOG, &args).unwrap().ends_with("b-2.0-1.fc29.x86_64"));
    }

    #[test]
    fn test_select_first_and_last() {
        assert!(select_line(LOG, &LineArgs::default()).unwrap().ends_with("a-1.0-1.fc29.x86_64"));
        let last = LineArgs {
            last: true,
            ..Default::default()
        };
        assert!(select_line(LOG, &last).unwrap().ends_with("b-2.0-1.fc29.x86_64"));
    }

    #[test]
    fn test_select_out_of_range() {
        let zero = LineArgs {
            line_number: Some(0),
            ..Default::default()
        };
        assert!(select_line(LOG, &zero).is_err());
        let far = LineArgs {
            line_number: Some(10),
            ..Default::default()
        };
        assert!(select_line(LOG, &far).is_err());
        assert!(select_line("", &LineArgs::default()).is_err());
    }

    #[test]
    fn test_explicit_line_wins() {
        let args = LineArgs {
            line: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(read_line(&args).unwrap(), "x");
    }
}
