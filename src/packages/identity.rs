// src/packages/identity.rs

//! Package identity extracted from a transaction log line
//!
//! A `PackageIdentity` is the normalized (name, version, arch) triple that
//! the log parser produces and the query layer turns into an `rpm -q`
//! specifier of the form `name[-version][.arch]`.

use serde::Serialize;
use std::fmt;

/// Normalized package identity
///
/// `version` carries the release too (`0.7.82.1-3.fc9`). The epoch is kept
/// for display only and never appears in a specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageIdentity {
    pub name: String,
    pub version: Option<String>,
    pub arch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch: Option<String>,
}

impl PackageIdentity {
    /// Create an identity with all optional segments absent
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            arch: None,
            epoch: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    /// Build the query specifier `name[-version][.arch]`
    pub fn specifier(&self) -> String {
        build_specifier(&self.name, self.version.as_deref(), self.arch.as_deref())
    }

    /// Same identity without the version segment
    ///
    /// Upgrade log entries name the *old* version, so queries that should hit
    /// the currently installed package go through this.
    pub fn without_version(&self) -> Self {
        Self {
            version: None,
            ..self.clone()
        }
    }

    /// Full EVRA-style label, including the epoch when known
    pub fn nevra(&self) -> String {
        let mut s = self.name.clone();
        if let Some(version) = &self.version {
            s.push('-');
            if let Some(epoch) = &self.epoch {
                s.push_str(epoch);
                s.push(':');
            }
            s.push_str(version);
        }
        if let Some(arch) = &self.arch {
            s.push('.');
            s.push_str(arch);
        }
        s
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nevra())
    }
}

/// Concatenate name, `-version` and `.arch`, skipping absent segments
pub fn build_specifier(name: &str, version: Option<&str>, arch: Option<&str>) -> String {
    let mut spec = String::from(name);
    if let Some(version) = version.filter(|v| !v.is_empty()) {
        spec.push('-');
        spec.push_str(version);
    }
    if let Some(arch) = arch.filter(|a| !a.is_empty()) {
        spec.push('.');
        spec.push_str(arch);
    }
    spec
}
