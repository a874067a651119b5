// src/lib.rs

//! rpmlog - review package transaction logs against the RPM database
//!
//! Takes one line of a yum/dnf transaction log, extracts the package
//! identity it mentions and runs an `rpm -q` query for it (changelog, file
//! list, dependency info, release notes).
//!
//! # Architecture
//!
//! - `log`: single-line parser for the four historical log formats
//! - `packages`: `PackageIdentity`, specifier building, the `rpm` process boundary
//! - `operations`: the fixed table of named queries
//! - `presenter`: rendering capability injected by the host
//! - `review`: parse → query → render for one user action

pub mod config;
mod error;
pub mod log;
pub mod operations;
pub mod packages;
pub mod presenter;
pub mod review;

pub use config::Config;
pub use error::{Error, Result};
pub use log::{LineParser, LogAction, LogEntry, LogFormat, ParserConfig};
pub use operations::Operation;
pub use packages::{PackageIdentity, QueryRunner, RpmCommand};
pub use presenter::{Presenter, WriterPresenter};
pub use review::{ReviewOutcome, Reviewer};
