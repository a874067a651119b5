// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use rpmlog::{QueryRunner, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

/// One sample line per supported log format, with the expected triple
pub const SAMPLES: &[(&str, (&str, &str, &str))] = &[
    (
        "Mar 23 05:37:10 Updated: system-config-printer-0.7.82.1-3.fc9.x86_64",
        ("system-config-printer", "0.7.82.1-3.fc9", "x86_64"),
    ),
    (
        "Mar 13 18:00:25 INFO Installed: systemd-python3-208-15.fc20.x86_64",
        ("systemd-python3", "208-15.fc20", "x86_64"),
    ),
    (
        "2017-07-21T02:31:43Z INFO Upgraded: mesa-libOSMesa-17.1.5-1.fc26.i686",
        ("mesa-libOSMesa", "17.1.5-1.fc26", "i686"),
    ),
    (
        "2018-12-23T15:46:33Z SUBDEBUG Upgraded: qemu-guest-agent-2:3.0.0-2.fc29.x86_64",
        ("qemu-guest-agent", "3.0.0-2.fc29", "x86_64"),
    ),
];

/// Runner answering from canned output and recording every query
#[derive(Default)]
pub struct CannedRunner {
    output: HashMap<String, Vec<String>>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl CannedRunner {
    pub fn with(mut self, flag: &str, lines: &[&str]) -> Self {
        self.output
            .insert(flag.to_string(), lines.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn specifiers(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, s)| s.clone()).collect()
    }
}

impl QueryRunner for CannedRunner {
    type Lines = std::vec::IntoIter<Result<String>>;

    fn query(&self, flag: &str, specifier: &str) -> Result<Self::Lines> {
        self.calls
            .borrow_mut()
            .push((flag.to_string(), specifier.to_string()));
        let lines: Vec<Result<String>> = self
            .output
            .get(flag)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(Ok)
            .collect();
        Ok(lines.into_iter())
    }
}

/// Write `content` to a temporary file and keep it alive with the handle
pub fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
