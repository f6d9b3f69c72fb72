use miette::Diagnostic;
use thiserror::Error;

/// Result type for format registration.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration-time failures raised while building a format from its
/// declared options. These are fatal to declaring the adapter.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("missing option '{name}'")]
    #[diagnostic(code(husk::format::missing_option))]
    MissingOption { name: &'static str },

    #[error("option '{name}' expects {expected}, got {found}")]
    #[diagnostic(code(husk::format::invalid_option_value))]
    InvalidOptionValue {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("option '{name}' holds invalid severity '{value}'")]
    #[diagnostic(
        code(husk::format::invalid_severity),
        help("valid severities are: major, normal, minor")
    )]
    InvalidSeverity { name: &'static str, value: String },

    #[error("invalid pattern '{pattern}'")]
    #[diagnostic(code(husk::format::invalid_regex))]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("a severity map was supplied but the pattern has no 'severity' capture group")]
    #[diagnostic(
        code(husk::format::severity_map_without_group),
        help("add a (?P<severity>...) group to output_regex or drop severity_map")
    )]
    SeverityMapWithoutSeverityGroup,
}

/// Run-time failures raised while processing one file's captured output.
/// These are recoverable per file; the adapter stays usable.
#[derive(Debug, Error, Diagnostic)]
pub enum ProcessError {
    #[error("unknown severity label '{label}' in tool output")]
    #[diagnostic(
        code(husk::format::unknown_severity_label),
        help("extend severity_map with a mapping for '{label}'")
    )]
    UnknownSeverityLabel { label: String },

    #[error("custom result stage failed: {source}")]
    #[diagnostic(code(husk::format::custom_stage))]
    Custom {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ProcessError {
    /// Wrap an error raised by a caller-supplied result stage.
    pub fn custom(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        ProcessError::Custom {
            source: source.into(),
        }
    }
}
