// src/operations.rs

//! Named query operations
//!
//! Every operation maps a parsed `PackageIdentity` to the output of one
//! `rpm -q` query, optionally post-processed. The table is fixed:
//!
//! | Operation     | rpm flag        | Specifier         | Post-processing        |
//! |---------------|-----------------|-------------------|------------------------|
//! | `changelog`   | `--changelog`   | name + arch       |                        |
//! | `info`        | `--info`        | name-version.arch |                        |
//! | `list`        | `--list`        | name-version.arch |                        |
//! | `docfiles`    | `--docfiles`    | name-version.arch |                        |
//! | `configfiles` | `--configfiles` | name-version.arch |                        |
//! | `provides`    | `--provides`    | name-version.arch |                        |
//! | `requires`    | `--requires`    | name-version.arch |                        |
//! | `conflicts`   | `--conflicts`   | name-version.arch |                        |
//! | `news`        | `--docfiles`    | name-version.arch | keep NEWS/ChangeLog    |

use crate::error::{Error, Result};
use crate::packages::{PackageIdentity, QueryRunner};
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

/// A query operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Changelog,
    Info,
    List,
    Docfiles,
    Configfiles,
    Provides,
    Requires,
    Conflicts,
    News,
}

/// Post-processing applied to an operation's raw output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFilter {
    /// Pass every line through
    All,
    /// Keep files whose basename mentions `news` or `change`
    ReleaseNotes,
}

impl LineFilter {
    pub fn keep(self, line: &str) -> bool {
        match self {
            LineFilter::All => true,
            LineFilter::ReleaseNotes => is_release_notes(line),
        }
    }
}

impl Operation {
    /// All operations in table order
    pub fn all() -> impl Iterator<Item = Operation> {
        Operation::iter()
    }

    /// Look up an operation by name
    pub fn parse(name: &str) -> Result<Self> {
        Operation::from_str(name).map_err(|_| Error::UnknownOperation(name.to_string()))
    }

    /// `rpm -q` flag this operation runs
    pub fn flag(self) -> &'static str {
        match self {
            Operation::Changelog => "--changelog",
            Operation::Info => "--info",
            Operation::List => "--list",
            Operation::Docfiles | Operation::News => "--docfiles",
            Operation::Configfiles => "--configfiles",
            Operation::Provides => "--provides",
            Operation::Requires => "--requires",
            Operation::Conflicts => "--conflicts",
        }
    }

    pub fn filter(self) -> LineFilter {
        match self {
            Operation::News => LineFilter::ReleaseNotes,
            _ => LineFilter::All,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Changelog => "Changelog of the currently installed package",
            Operation::Info => "Package information",
            Operation::List => "Files in the package",
            Operation::Docfiles => "Documentation files",
            Operation::Configfiles => "Configuration files",
            Operation::Provides => "Capabilities the package provides",
            Operation::Requires => "Capabilities the package requires",
            Operation::Conflicts => "Capabilities the package conflicts with",
            Operation::News => "NEWS and ChangeLog files among the documentation",
        }
    }

    /// Identity actually sent to rpm
    ///
    /// Upgrade entries log the old version, which no longer matches the
    /// installed package, so the changelog is looked up by name and arch.
    pub fn target(self, identity: &PackageIdentity) -> PackageIdentity {
        match self {
            Operation::Changelog => identity.without_version(),
            _ => identity.clone(),
        }
    }

    pub fn specifier(self, identity: &PackageIdentity) -> String {
        self.target(identity).specifier()
    }

    /// Start the query and return its (filtered) lines lazily
    pub fn stream<R: QueryRunner>(
        self,
        identity: &PackageIdentity,
        runner: &R,
    ) -> Result<OperationLines<R::Lines>> {
        let specifier = self.specifier(identity);
        debug!("{}: rpm -q {} {}", self, self.flag(), specifier);
        let inner = runner.query(self.flag(), &specifier)?;
        Ok(OperationLines {
            inner,
            filter: self.filter(),
        })
    }

    /// Run the query to completion
    pub fn run<R: QueryRunner>(self, identity: &PackageIdentity, runner: &R) -> Result<Vec<String>> {
        self.stream(identity, runner)?.collect()
    }
}

/// Output of one operation
pub struct OperationLines<L> {
    inner: L,
    filter: LineFilter,
}

impl<L> Iterator for OperationLines<L>
where
    L: Iterator<Item = Result<String>>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(line) if !self.filter.keep(&line) => continue,
                item => return Some(item),
            }
        }
    }
}

fn is_release_notes(path: &str) -> bool {
    let Some(base) = Path::new(path).file_name() else {
        return false;
    };
    let base = base.to_string_lossy().to_lowercase();
    base.contains("news") || base.contains("change")
}
