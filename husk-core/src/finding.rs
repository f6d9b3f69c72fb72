//! Structured results produced by result-processing stages.

use serde::{Deserialize, Serialize};

use crate::Severity;

/// One diagnostic extracted from a tool's textual output.
///
/// Location fields are 1-based and absent when the tool did not report them
/// (or reported something non-numeric).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Label naming where the diagnostic came from, usually the wrapped
    /// executable.
    pub origin: String,
    pub severity: Severity,
    pub message: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub end_line: Option<u32>,
    pub end_column: Option<u32>,
    /// Extra context reported by the tool alongside the message.
    pub additional_info: Option<String>,
}

impl Issue {
    /// Create an issue carrying only an origin, severity and message.
    pub fn new(
        origin: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            severity,
            message: message.into(),
            line: None,
            column: None,
            end_line: None,
            end_column: None,
            additional_info: None,
        }
    }
}

/// A replacement for a run of lines in the original file, derived from a
/// tool-corrected version of its content.
///
/// `start_line` and `end_line` are 1-based and inclusive. A pure insertion
/// carries an empty range (`end_line == start_line - 1`) where `start_line`
/// is the line the replacement goes in front of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub severity: Severity,
    pub message: String,
    pub start_line: u32,
    pub end_line: u32,
    /// The corrected lines replacing the original range.
    pub replacement: Vec<String>,
}

impl Patch {
    /// Number of original lines this patch replaces.
    pub fn original_len(&self) -> u32 {
        (self.end_line + 1).saturating_sub(self.start_line)
    }
}

/// A result produced by any result-processing stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finding {
    Issue(Issue),
    Patch(Patch),
}

impl Finding {
    pub fn as_issue(&self) -> Option<&Issue> {
        match self {
            Finding::Issue(issue) => Some(issue),
            Finding::Patch(_) => None,
        }
    }

    pub fn as_patch(&self) -> Option<&Patch> {
        match self {
            Finding::Patch(patch) => Some(patch),
            Finding::Issue(_) => None,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Finding::Issue(issue) => issue.severity,
            Finding::Patch(patch) => patch.severity,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Finding::Issue(issue) => &issue.message,
            Finding::Patch(patch) => &patch.message,
        }
    }
}

impl From<Issue> for Finding {
    fn from(issue: Issue) -> Self {
        Finding::Issue(issue)
    }
}

impl From<Patch> for Finding {
    fn from(patch: Patch) -> Self {
        Finding::Patch(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_new_leaves_locations_absent() {
        let issue = Issue::new("xlint", Severity::Major, "bad thing");
        assert_eq!(issue.origin, "xlint");
        assert_eq!(issue.line, None);
        assert_eq!(issue.column, None);
        assert_eq!(issue.end_line, None);
        assert_eq!(issue.end_column, None);
        assert_eq!(issue.additional_info, None);
    }

    #[test]
    fn test_patch_original_len() {
        let patch = Patch {
            severity: Severity::Normal,
            message: "Inconsistency found.".to_string(),
            start_line: 2,
            end_line: 4,
            replacement: vec!["B".to_string(), "c".to_string(), "D".to_string()],
        };
        assert_eq!(patch.original_len(), 3);

        let insertion = Patch {
            severity: Severity::Normal,
            message: "Inconsistency found.".to_string(),
            start_line: 3,
            end_line: 2,
            replacement: vec!["new".to_string()],
        };
        assert_eq!(insertion.original_len(), 0);
    }

    #[test]
    fn test_finding_accessors() {
        let finding: Finding = Issue::new("xlint", Severity::Minor, "note").into();
        assert!(finding.as_issue().is_some());
        assert!(finding.as_patch().is_none());
        assert_eq!(finding.severity(), Severity::Minor);
        assert_eq!(finding.message(), "note");
    }
}
