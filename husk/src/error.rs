use miette::Diagnostic;
use thiserror::Error;

/// Result type for adapter declaration.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for failures raised by a tool author's stage implementation.
pub type StageError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration-time failures, raised while declaring an adapter. No tool
/// is ever invoked with an invalid declaration.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no output streams selected")]
    #[diagnostic(
        code(husk::no_output_stream),
        help("enable use_stdout, use_stderr, or both")
    )]
    NoOutputStreamSelected,

    #[error("invalid output format '{name}'")]
    #[diagnostic(
        code(husk::invalid_output_format),
        help("valid formats are: regex, corrected")
    )]
    InvalidOutputFormat { name: String },

    #[error("unknown options: {}", .names.join(", "))]
    #[diagnostic(
        code(husk::unknown_options),
        help("only options declared by the selected output format are accepted")
    )]
    UnknownOptions { names: Vec<String> },

    #[error("both a custom result stage and an output format were supplied")]
    #[diagnostic(
        code(husk::conflicting_result_stage),
        help("drop output_format or the custom stage; exactly one decides result processing")
    )]
    ConflictingResultStage,

    #[error("no result stage supplied")]
    #[diagnostic(
        code(husk::missing_result_stage),
        help("select an output_format or supply a custom result stage")
    )]
    MissingResultStage,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] husk_format::Error),
}

/// Run-time failures, scoped to processing one file. The adapter stays
/// usable for further files.
#[derive(Debug, Error, Diagnostic)]
pub enum RunError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Params(#[from] husk_params::Error),

    #[error("config stage failed: {source}")]
    #[diagnostic(code(husk::run::config_stage))]
    ConfigStage {
        #[source]
        source: StageError,
    },

    #[error("failed to write config file")]
    #[diagnostic(code(husk::run::config_file))]
    ConfigFile {
        #[source]
        source: std::io::Error,
    },

    #[error("argument stage failed: {source}")]
    #[diagnostic(code(husk::run::argument_stage))]
    ArgumentsStage {
        #[source]
        source: StageError,
    },

    #[error("failed to run '{executable}'")]
    #[diagnostic(
        code(husk::run::spawn),
        help("check that '{executable}' is installed and on PATH")
    )]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] husk_format::ProcessError),
}
