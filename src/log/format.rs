// src/log/format.rs

//! Known transaction log line shapes
//!
//! yum and dnf have written four mutually inconsistent single-line formats
//! over the years:
//!
//! 1. `/var/log/yum.log`
//!    `Mar 23 05:37:10 Updated: system-config-printer-0.7.82.1-3.fc9.x86_64`
//! 2. `/var/log/dnf.rpm.log` (early dnf)
//!    `Mar 13 18:00:25 INFO Installed: systemd-python3-208-15.fc20.x86_64`
//! 3. `/var/log/dnf.rpm.log`
//!    `2017-07-21T02:31:43Z INFO Upgraded: mesa-libOSMesa-17.1.5-1.fc26.i686`
//! 4. `/var/log/dnf.rpm.log` (dnf with epoch in NEVRA)
//!    `2018-12-23T15:46:33Z SUBDEBUG Upgraded: qemu-guest-agent-2:3.0.0-2.fc29.x86_64`

use serde::Serialize;
use std::fmt;
use strum_macros::EnumString;

/// A supported log line shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// `<date> <time> Updated: <NEVRA>`
    Yum,
    /// `<date> <time> INFO <action>: <NEVRA>`
    DnfSyslog,
    /// `<iso8601> INFO <action>: <NEVRA>`
    DnfInfo,
    /// `<iso8601> SUBDEBUG <action>: <NEVRA>`
    DnfSubdebug,
}

impl LogFormat {
    /// Pick the format from the whitespace-split fields of a line
    ///
    /// Returns `None` when the line is too short to classify.
    pub fn detect(fields: &[&str]) -> Option<Self> {
        match fields.get(1).copied()? {
            "INFO" => return Some(Self::DnfInfo),
            "SUBDEBUG" => return Some(Self::DnfSubdebug),
            _ => {}
        }
        if fields.get(3).copied() == Some("INFO") {
            Some(Self::DnfSyslog)
        } else {
            Some(Self::Yum)
        }
    }

    /// 0-based index of the field holding the package token
    pub fn package_field(self) -> usize {
        match self {
            Self::DnfInfo | Self::DnfSubdebug => 3,
            Self::DnfSyslog => 5,
            Self::Yum => 4,
        }
    }

    /// 0-based index of the action word (`Installed:` etc.)
    pub fn action_field(self) -> usize {
        self.package_field() - 1
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yum => write!(f, "yum"),
            Self::DnfSyslog => write!(f, "dnf-syslog"),
            Self::DnfInfo => write!(f, "dnf-info"),
            Self::DnfSubdebug => write!(f, "dnf-subdebug"),
        }
    }
}

/// Transaction action recorded in front of the package token
#[derive(Debug, Clone, PartialEq, Eq, EnumString, Serialize)]
pub enum LogAction {
    Installed,
    Updated,
    Upgraded,
    Erased,
    Reinstalled,
    Downgraded,
    Obsoleted,
    #[strum(default)]
    Other(String),
}

impl LogAction {
    /// Parse the action field, ignoring the trailing `:`
    pub fn from_field(field: &str) -> Self {
        let word = field.trim_end_matches(':');
        // Infallible: unknown words land in `Other`
        word.parse()
            .unwrap_or_else(|_| LogAction::Other(word.to_string()))
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed => write!(f, "Installed"),
            Self::Updated => write!(f, "Updated"),
            Self::Upgraded => write!(f, "Upgraded"),
            Self::Erased => write!(f, "Erased"),
            Self::Reinstalled => write!(f, "Reinstalled"),
            Self::Downgraded => write!(f, "Downgraded"),
            Self::Obsoleted => write!(f, "Obsoleted"),
            Self::Other(word) => write!(f, "{}", word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn test_detect_formats() {
        let cases = [
            ("Mar 23 05:37:10 Updated: a-1.0-1.x86_64", LogFormat::Yum, 4),
            ("Mar 13 18:00:25 INFO Installed: a-1.0-1.x86_64", LogFormat::DnfSyslog, 5),
            ("2017-07-21T02:31:43Z INFO Upgraded: a-1.0-1.i686", LogFormat::DnfInfo, 3),
            ("2018-12-23T15:46:33Z SUBDEBUG Upgraded: a-1.0-1.x86_64", LogFormat::DnfSubdebug, 3),
        ];
        for (line, expected, field) in cases {
            let format = LogFormat::detect(&fields(line)).unwrap();
            assert_eq!(format, expected, "{}", line);
            assert_eq!(format.package_field(), field);
        }
    }

    #[test]
    fn test_detect_short_line() {
        assert_eq!(LogFormat::detect(&fields("")), None);
        assert_eq!(LogFormat::detect(&fields("single")), None);
        // Two fields classify, but the package field will be missing
        assert_eq!(LogFormat::detect(&fields("a b")), Some(LogFormat::Yum));
    }

    #[test]
    fn test_action_from_field() {
        assert_eq!(LogAction::from_field("Upgraded:"), LogAction::Upgraded);
        assert_eq!(LogAction::from_field("Installed:"), LogAction::Installed);
        assert_eq!(
            LogAction::from_field("Cleanup:"),
            LogAction::Other("Cleanup".to_string())
        );
        assert_eq!(LogAction::from_field("Erased:").to_string(), "Erased");
    }
}
