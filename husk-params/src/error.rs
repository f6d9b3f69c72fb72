use miette::Diagnostic;
use thiserror::Error;

/// Result type for parameter routing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("missing required parameter '{name}'")]
    #[diagnostic(
        code(husk::params::missing_required),
        help("provide '{name}' in the settings passed to the adapter")
    )]
    MissingRequired { name: String },

    #[error("parameter '{name}' expects {expected}, got {found}")]
    #[diagnostic(code(husk::params::invalid_type))]
    InvalidType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown parameters: {}", .names.join(", "))]
    #[diagnostic(
        code(husk::params::unknown),
        help("remove the unknown settings or declare them on one of the adapter's stages")
    )]
    Unknown { names: Vec<String> },
}
