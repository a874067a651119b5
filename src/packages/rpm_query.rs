// src/packages/rpm_query.rs

//! Query the local RPM database
//!
//! Each query spawns one short-lived `rpm -q <flag> <specifier>` child and
//! exposes its standard output as a lazy sequence of lines. The child is
//! reaped once stdout is exhausted; a non-zero exit is reported as the last
//! item of the sequence.

use crate::error::{Error, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Child, ChildStderr, ChildStdout, Command, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Runs a single metadata query against the package database
pub trait QueryRunner {
    /// Line sequence produced by one query
    type Lines: Iterator<Item = Result<String>>;

    /// Start `-q <flag> <specifier>` and return its output lines
    fn query(&self, flag: &str, specifier: &str) -> Result<Self::Lines>;
}

/// `rpm` command-line invocation settings
#[derive(Debug, Clone)]
pub struct RpmCommand {
    /// Program to run (usually `rpm`)
    pub program: PathBuf,
    /// Alternate database directory (`--dbpath`)
    pub dbpath: Option<PathBuf>,
    /// Alternate installation root (`--root`)
    pub root: Option<PathBuf>,
}

impl Default for RpmCommand {
    fn default() -> Self {
        Self::new("rpm")
    }
}

impl RpmCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            dbpath: None,
            root: None,
        }
    }

    /// Full argument vector for a query, without the program name
    pub fn args(&self, flag: &str, specifier: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(root) = &self.root {
            args.push("--root".to_string());
            args.push(root.display().to_string());
        }
        if let Some(dbpath) = &self.dbpath {
            args.push("--dbpath".to_string());
            args.push(dbpath.display().to_string());
        }
        args.push("-q".to_string());
        args.push(flag.to_string());
        args.push(specifier.to_string());
        args
    }

    /// Check if the configured program can be found
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }
}

impl QueryRunner for RpmCommand {
    type Lines = QueryLines;

    fn query(&self, flag: &str, specifier: &str) -> Result<QueryLines> {
        let args = self.args(flag, specifier);
        debug!("Running {} {}", self.program.display(), args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::QueryProcessError(format!(
                    "Failed to run {}: {}. Is rpm installed?",
                    self.program.display(),
                    e
                ))
            })?;

        let command = format!("{} -q {} {}", self.program.display(), flag, specifier);

        let stdout = child.stdout.take().ok_or_else(|| {
            Error::QueryProcessError(format!("No stdout from {}", self.program.display()))
        })?;
        let stderr = child.stderr.take().map(drain_stderr);

        Ok(QueryLines {
            command,
            child: Some(child),
            stdout: Some(BufReader::new(stdout)),
            stderr,
            buf: Vec::new(),
        })
    }
}

/// Collect stderr on a helper thread so a chatty child never blocks on it
fn drain_stderr(mut pipe: ChildStderr) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut bytes = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut bytes) {
            warn!("Could not read stderr: {}", e);
        }
        String::from_utf8_lossy(&bytes).into_owned()
    })
}

/// Lazy line sequence over a running query's stdout
///
/// Lines are decoded lossily: rpm output (old changelog entries in
/// particular) is not guaranteed to be UTF-8.
pub struct QueryLines {
    command: String,
    child: Option<Child>,
    stdout: Option<BufReader<ChildStdout>>,
    stderr: Option<JoinHandle<String>>,
    buf: Vec<u8>,
}

impl QueryLines {
    /// Reap the child; `Some(err)` if it did not exit cleanly
    fn finish(&mut self) -> Option<Error> {
        // Close our end of stdout first so the child cannot block writing it
        self.stdout = None;
        let mut child = self.child.take()?;
        let status = child.wait();

        let stderr = match self.stderr.take().map(JoinHandle::join) {
            Some(Ok(text)) => text,
            Some(Err(_)) => {
                warn!("stderr reader for {} panicked", self.command);
                String::new()
            }
            None => String::new(),
        };

        match status {
            Ok(status) if status.success() => None,
            Ok(status) => Some(Error::QueryProcessError(format!(
                "{} exited with {}: {}",
                self.command,
                status,
                stderr.trim()
            ))),
            Err(e) => Some(Error::QueryProcessError(format!(
                "Failed to wait for {}: {}",
                self.command, e
            ))),
        }
    }
}

impl Iterator for QueryLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.stdout.as_mut()?;
        self.buf.clear();
        match reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => self.finish().map(Err),
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).trim_end().to_string())),
            Err(e) => {
                // Still reap the child so it does not linger as a zombie
                let _ = self.finish();
                Some(Err(Error::QueryProcessError(format!(
                    "Failed to read output of {}: {}",
                    self.command, e
                ))))
            }
        }
    }
}

impl Drop for QueryLines {
    fn drop(&mut self) {
        self.stdout = None;
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        if let Some(handle) = self.stderr.take() {
            let _ = handle.join();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_plain() {
        let rpm = RpmCommand::default();
        assert_eq!(
            rpm.args("--info", "bash.x86_64"),
            vec!["-q", "--info", "bash.x86_64"]
        );
    }

    #[test]
    fn test_args_root_and_dbpath() {
        let mut rpm = RpmCommand::default();
        rpm.root = Some(PathBuf::from("/mnt/sysimage"));
        rpm.dbpath = Some(PathBuf::from("/var/lib/rpm"));
        assert_eq!(
            rpm.args("--list", "bash"),
            vec!["--root", "/mnt/sysimage", "--dbpath", "/var/lib/rpm", "-q", "--list", "bash"]
        );
    }

    #[test]
    fn test_spawn_failure_is_query_error() {
        let rpm = RpmCommand::new("/nonexistent/path/to/rpm");
        assert!(!rpm.is_available());
        let err = rpm.query("--info", "bash").err().unwrap();
        assert!(matches!(err, Error::QueryProcessError(_)));
    }

    #[test]
    fn test_clean_exit_without_output_is_empty() {
        // `true` ignores its arguments and prints nothing
        let rpm = RpmCommand::new("true");
        let lines: Vec<String> = rpm
            .query("--info", "bash")
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_nonzero_exit_is_query_error() {
        let rpm = RpmCommand::new("false");
        let result: Result<Vec<String>> = rpm.query("--info", "bash").unwrap().collect();
        assert!(matches!(result, Err(Error::QueryProcessError(_))));
    }

    #[test]
    fn test_lines_are_trimmed() {
        // `echo` prints its arguments followed by a newline
        let rpm = RpmCommand::new("echo");
        let lines: Vec<String> = rpm
            .query("--docfiles", "pkg   ")
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["-q --docfiles pkg"]);
    }
}
