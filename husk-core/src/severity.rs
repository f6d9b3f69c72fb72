//! Severity levels for findings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level of a finding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed.
    Major,
    /// Should be fixed.
    #[default]
    Normal,
    /// Worth mentioning.
    Minor,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Major => write!(f, "major"),
            Severity::Normal => write!(f, "normal"),
            Severity::Minor => write!(f, "minor"),
        }
    }
}

/// Error returned when parsing an unrecognized severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid severity '{0}'")]
pub struct ParseSeverityError(pub String);

impl std::str::FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(Severity::Major),
            "normal" => Ok(Severity::Normal),
            "minor" => Ok(Severity::Minor),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Major.to_string(), "major");
        assert_eq!(Severity::Normal.to_string(), "normal");
        assert_eq!(Severity::Minor.to_string(), "minor");
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("major".parse::<Severity>().unwrap(), Severity::Major);
        assert_eq!("NORMAL".parse::<Severity>().unwrap(), Severity::Normal);
        assert_eq!("Minor".parse::<Severity>().unwrap(), Severity::Minor);
        assert!("warning".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_default() {
        assert_eq!(Severity::default(), Severity::Normal);
    }

    #[test]
    fn test_severity_serde() {
        assert_eq!(serde_json::to_string(&Severity::Major).unwrap(), "\"major\"");
        let parsed: Severity = serde_json::from_str("\"minor\"").unwrap();
        assert_eq!(parsed, Severity::Minor);
    }
}
