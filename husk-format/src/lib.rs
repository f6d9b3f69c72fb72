//! Output-format strategies: how raw tool output becomes structured findings.
//!
//! An adapter selects exactly one result-processing stage: one of the
//! built-in formats behind [`FormatKind`] (resolved by name once, at
//! declaration), or a caller-supplied [`ResultFormat`] implementation. Both
//! paths produce the same closed [`Finding`](husk_core::Finding) type.

mod corrected;
mod diff;
mod error;
mod options;
mod regex;

pub use corrected::CorrectedFormat;
pub use error::{Error, ProcessError, Result};
pub use options::FormatOptions;
pub use self::regex::RegexFormat;

use husk_core::{CapturedOutput, FileContext, Finding};
use husk_params::{ParamMap, StageParams};

/// Everything a result-processing stage may look at for one file.
#[derive(Debug, Clone, Copy)]
pub struct ResultContext<'a> {
    /// Captured output, reduced to the adapter's active streams.
    pub output: &'a CapturedOutput,
    /// The processed file.
    pub file: &'a FileContext<'a>,
    /// Label for findings that don't name their own origin, usually the
    /// wrapped executable.
    pub origin: &'a str,
    /// The tool's exit code, when it exited normally. The built-in formats
    /// ignore it.
    pub exit_code: Option<i32>,
}

/// A result-processing stage.
///
/// Implementations are shared across files and threads, so they carry no
/// per-call state.
pub trait ResultFormat: Send + Sync {
    /// Extra per-run settings this stage accepts. The built-in formats take
    /// all their configuration at declaration and accept none.
    fn params(&self) -> StageParams {
        StageParams::default()
    }

    /// Turn one file's captured output into findings.
    fn process(
        &self,
        ctx: &ResultContext<'_>,
        params: &ParamMap,
    ) -> std::result::Result<Vec<Finding>, ProcessError>;
}

/// The closed set of built-in formats, resolved by name at adapter
/// declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Regex,
    Corrected,
}

impl FormatKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "regex" => Some(FormatKind::Regex),
            "corrected" => Some(FormatKind::Corrected),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Regex => "regex",
            FormatKind::Corrected => "corrected",
        }
    }

    /// Option names the format consumes from the adapter declaration.
    pub fn option_names(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Regex => RegexFormat::OPTION_NAMES,
            FormatKind::Corrected => CorrectedFormat::OPTION_NAMES,
        }
    }

    /// Build the format from its declared options.
    pub fn build(&self, options: FormatOptions) -> Result<Box<dyn ResultFormat>> {
        match self {
            FormatKind::Regex => Ok(Box::new(RegexFormat::from_options(options)?)),
            FormatKind::Corrected => Ok(Box::new(CorrectedFormat::from_options(options)?)),
        }
    }
}
