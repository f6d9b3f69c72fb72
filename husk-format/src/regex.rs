//! Regex-based issue extraction.

use indexmap::IndexMap;
use regex::{Captures, Regex};

use husk_core::{Finding, Issue, Severity};
use husk_params::ParamMap;

use crate::{Error, FormatOptions, ProcessError, Result, ResultContext, ResultFormat};

/// Parses tool output by scanning it with a pattern, one issue per match.
///
/// The pattern communicates through named capture groups: `line`, `column`,
/// `end_line`, `end_column`, `severity`, `message`, `origin` and
/// `additional_info`. Location groups that match nothing, or something
/// non-numeric, leave the issue field absent.
#[derive(Debug)]
pub struct RegexFormat {
    pattern: Regex,
    severity_map: IndexMap<String, Severity>,
    message: Option<String>,
}

impl RegexFormat {
    /// Option names this format consumes from the adapter declaration.
    pub const OPTION_NAMES: &'static [&'static str] =
        &["output_regex", "result_message", "severity_map"];

    /// Build the format from its declared options.
    ///
    /// The pattern is required and must compile. A supplied severity map
    /// requires a `severity` capture group; the map overlays the default
    /// `error/warning/warn/info` mappings, keys compared case-insensitively.
    pub fn from_options(mut options: FormatOptions) -> Result<Self> {
        let source = options
            .take_str("output_regex")?
            .ok_or(Error::MissingOption {
                name: "output_regex",
            })?;
        let pattern = Regex::new(&source).map_err(|source_err| Error::InvalidRegex {
            pattern: source,
            source: source_err,
        })?;

        let supplied = options.take_severity_map("severity_map")?;
        if supplied.is_some() && !has_severity_group(&pattern) {
            return Err(Error::SeverityMapWithoutSeverityGroup);
        }

        let mut severity_map = default_severity_map();
        severity_map.extend(supplied.unwrap_or_default());

        Ok(Self {
            pattern,
            severity_map,
            message: options.take_str("result_message")?,
        })
    }

    fn issue_from(
        &self,
        ctx: &ResultContext<'_>,
        caps: &Captures<'_>,
    ) -> std::result::Result<Issue, ProcessError> {
        let group = |name: &str| caps.name(name).map(|m| m.as_str());
        let location = |name: &str| group(name).and_then(|text| text.parse::<u32>().ok());

        let severity = match group("severity") {
            Some(label) => self
                .severity_map
                .get(&label.to_lowercase())
                .copied()
                .ok_or_else(|| ProcessError::UnknownSeverityLabel {
                    label: label.to_string(),
                })?,
            None => Severity::Normal,
        };

        let message = match &self.message {
            Some(fixed) => fixed.clone(),
            None => group("message").unwrap_or_default().to_string(),
        };

        Ok(Issue {
            origin: group("origin")
                .map(str::to_string)
                .unwrap_or_else(|| ctx.origin.to_string()),
            severity,
            message,
            line: location("line"),
            column: location("column"),
            end_line: location("end_line"),
            end_column: location("end_column"),
            additional_info: group("additional_info").map(str::to_string),
        })
    }
}

impl ResultFormat for RegexFormat {
    fn process(
        &self,
        ctx: &ResultContext<'_>,
        _params: &ParamMap,
    ) -> std::result::Result<Vec<Finding>, ProcessError> {
        let mut findings = Vec::new();
        for text in ctx.output.streams() {
            for caps in self.pattern.captures_iter(text) {
                findings.push(Finding::Issue(self.issue_from(ctx, &caps)?));
            }
        }
        Ok(findings)
    }
}

fn has_severity_group(pattern: &Regex) -> bool {
    pattern
        .capture_names()
        .flatten()
        .any(|name| name == "severity")
}

fn default_severity_map() -> IndexMap<String, Severity> {
    IndexMap::from([
        ("error".to_string(), Severity::Major),
        ("warning".to_string(), Severity::Normal),
        ("warn".to_string(), Severity::Normal),
        ("info".to_string(), Severity::Minor),
    ])
}
