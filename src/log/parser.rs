// src/log/parser.rs

//! Single-line transaction log parser
//!
//! Turns one line of a yum/dnf transaction log into a `PackageIdentity`.
//! The package token (a NEVRA such as `1:openoffice.org-math-2.4.0-12.1.fc9.x86_64`)
//! is decomposed as:
//!
//! - optional leading epoch `N:`, stripped
//! - name: everything before the first `-` that is followed by a digit
//! - optional dnf-style epoch `N:` right after that hyphen, stripped
//! - version: from that digit up to the last `.`
//! - arch: after the last `.`
//!
//! There is no fallback: a token without these boundaries is malformed.

use crate::error::{Error, Result};
use crate::log::format::{LogAction, LogFormat};
use crate::packages::PackageIdentity;
use serde::Serialize;
use tracing::debug;

/// Parser settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserConfig {
    /// Emit every parsed triple as a debug event
    pub debug: bool,
}

/// Everything the parser learns from one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub format: LogFormat,
    pub action: LogAction,
    pub identity: PackageIdentity,
}

/// Log line parser
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a line into its package identity
    pub fn parse(&self, line: &str) -> Result<PackageIdentity> {
        self.parse_entry(line).map(|entry| entry.identity)
    }

    /// Parse a line, also reporting its format and action
    pub fn parse_entry(&self, line: &str) -> Result<LogEntry> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let format = LogFormat::detect(&fields)
            .ok_or_else(|| Error::malformed(line, "too few fields"))?;

        let token = fields
            .get(format.package_field())
            .copied()
            .ok_or_else(|| Error::malformed(line, "missing package field"))?;

        let action = LogAction::from_field(fields[format.action_field()]);
        let identity = decompose_nevra(token).map_err(|reason| Error::malformed(line, reason))?;

        if self.config.debug {
            debug!(
                format = %format,
                name = %identity.name,
                version = ?identity.version,
                arch = ?identity.arch,
                epoch = ?identity.epoch,
                "parsed log line"
            );
        }

        Ok(LogEntry {
            format,
            action,
            identity,
        })
    }
}

/// Split a NEVRA token into name, version, arch (and epoch)
///
/// Errors carry a short reason; the caller attaches the line.
pub fn decompose_nevra(token: &str) -> std::result::Result<PackageIdentity, &'static str> {
    let (mut epoch, working) = match split_epoch(token) {
        Some((epoch, rest)) => (Some(epoch), rest),
        None => (None, token),
    };
    if working.is_empty() {
        return Err("nothing after epoch");
    }

    let start = version_start_index(working).ok_or("no name/version boundary")?;
    let name = &working[..start - 1];
    if name.is_empty() {
        return Err("empty package name");
    }

    let mut rest = &working[start..];
    if let Some((dnf_epoch, after)) = split_epoch(rest) {
        epoch = Some(dnf_epoch);
        rest = after;
    }

    let dot = rest.rfind('.').ok_or("no architecture boundary")?;
    let (version, arch) = (&rest[..dot], &rest[dot + 1..]);
    if version.is_empty() {
        return Err("empty version");
    }
    if arch.is_empty() {
        return Err("empty architecture");
    }

    let mut identity = PackageIdentity::new(name)
        .with_version(version)
        .with_arch(arch);
    identity.epoch = epoch.map(str::to_string);
    Ok(identity)
}

/// Index of the first digit preceded by `-`, never position 0
fn version_start_index(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (1..bytes.len()).find(|&i| bytes[i].is_ascii_digit() && bytes[i - 1] == b'-')
}

/// Split `N:rest` when the token begins with an all-digit epoch
fn split_epoch(s: &str) -> Option<(&str, &str)> {
    let colon = s.find(':')?;
    let (epoch, rest) = (&s[..colon], &s[colon + 1..]);
    if !epoch.is_empty() && epoch.bytes().all(|b| b.is_ascii_digit()) {
        Some((epoch, rest))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(line: &str) -> (String, Option<String>, Option<String>) {
        let id = LineParser::default().parse(line).unwrap();
        (id.name, id.version, id.arch)
    }

    fn expect(name: &str, version: &str, arch: &str) -> (String, Option<String>, Option<String>) {
        (name.to_string(), Some(version.to_string()), Some(arch.to_string()))
    }

    #[test]
    fn test_yum_format() {
        assert_eq!(
            triple("Mar 23 05:37:10 Updated: system-config-printer-0.7.82.1-3.fc9.x86_64"),
            expect("system-config-printer", "0.7.82.1-3.fc9", "x86_64")
        );
    }

    #[test]
    fn test_dnf_syslog_format() {
        assert_eq!(
            triple("Mar 13 18:00:25 INFO Installed: systemd-python3-208-15.fc20.x86_64"),
            expect("systemd-python3", "208-15.fc20", "x86_64")
        );
    }

    #[test]
    fn test_dnf_info_format() {
        assert_eq!(
            triple("2017-07-21T02:31:43Z INFO Upgraded: mesa-libOSMesa-17.1.5-1.fc26.i686"),
            expect("mesa-libOSMesa", "17.1.5-1.fc26", "i686")
        );
    }

    #[test]
    fn test_dnf_subdebug_with_inner_epoch() {
        let id = LineParser::default()
            .parse("2018-12-23T15:46:33Z SUBDEBUG Upgraded: qemu-guest-agent-2:3.0.0-2.fc29.x86_64")
            .unwrap();
        assert_eq!(id.name, "qemu-guest-agent");
        assert_eq!(id.version.as_deref(), Some("3.0.0-2.fc29"));
        assert_eq!(id.arch.as_deref(), Some("x86_64"));
        assert_eq!(id.epoch.as_deref(), Some("2"));
    }

    #[test]
    fn test_leading_epoch_stripped() {
        let id = LineParser::default()
            .parse("Mar 23 05:33:30 Updated: 1:openoffice.org-math-2.4.0-12.1.fc9.x86_64")
            .unwrap();
        assert_eq!(id.name, "openoffice.org-math");
        assert_eq!(id.version.as_deref(), Some("2.4.0-12.1.fc9"));
        assert_eq!(id.arch.as_deref(), Some("x86_64"));
        assert_eq!(id.epoch.as_deref(), Some("1"));
        assert!(!id.specifier().contains("1:"));
    }

    #[test]
    fn test_name_starting_with_digit() {
        assert_eq!(
            triple("2020-05-01T10:00:00Z INFO Installed: 389-ds-base-1.4.3.8-1.fc32.x86_64"),
            expect("389-ds-base", "1.4.3.8-1.fc32", "x86_64")
        );
    }

    #[test]
    fn test_noarch_and_entry_fields() {
        let entry = LineParser::default()
            .parse_entry("2018-12-23T15:46:33Z SUBDEBUG Installed: python3-six-1.11.0-5.fc29.noarch")
            .unwrap();
        assert_eq!(entry.format, LogFormat::DnfSubdebug);
        assert_eq!(entry.action, LogAction::Installed);
        assert_eq!(entry.identity.arch.as_deref(), Some("noarch"));
    }

    #[test]
    fn test_no_version_boundary_is_malformed() {
        let err = LineParser::default()
            .parse("Mar 23 05:37:10 Updated: nothing_here.x86_64")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedLineError { .. }));
    }

    #[test]
    fn test_no_arch_boundary_is_malformed() {
        assert!(matches!(
            decompose_nevra("kernel-6"),
            Err("no architecture boundary")
        ));
        assert!(decompose_nevra("bash-5.2-1.").is_err());
    }

    #[test]
    fn test_short_lines_are_malformed() {
        let parser = LineParser::default();
        for line in ["", "   ", "Mar", "Mar 23 05:37:10", "2018-12-23T15:46:33Z INFO Upgraded:"] {
            assert!(
                matches!(parser.parse(line), Err(Error::MalformedLineError { .. })),
                "{:?}",
                line
            );
        }
    }

    #[test]
    fn test_empty_name_is_malformed() {
        assert_eq!(decompose_nevra("-1.0-1.x86_64"), Err("empty package name"));
        assert_eq!(decompose_nevra("1:"), Err("nothing after epoch"));
    }

    #[test]
    fn test_version_start_index() {
        assert_eq!(version_start_index("a-1"), Some(2));
        assert_eq!(version_start_index("1-a"), None);
        assert_eq!(version_start_index("python3-six-1.0"), Some(12));
    }
}
