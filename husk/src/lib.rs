//! Adapter framework turning external command-line analysis tools into
//! components producing structured, uniform diagnostics.
//!
//! Declaring an adapter binds one executable to the framework: stream usage,
//! an optional generated config file, the argument construction, and exactly
//! one result-processing stage, either a built-in output format (`regex` or
//! `corrected`) or a custom [`ResultFormat`]. Declarations are validated up
//! front; per-file processing then flows through a fixed pipeline.
//!
//! ```text
//! declaration → validation → Adapter (immutable)
//! Adapter::run: config file → arguments → invoke tool → capture → findings
//! ```
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//!
//! use husk::{Adapter, FileContext, ParamMap, StageError, Tool};
//!
//! struct XLint;
//!
//! impl Tool for XLint {
//!     fn create_arguments(
//!         &self,
//!         file: &FileContext<'_>,
//!         _config_file: Option<&Path>,
//!         _params: &ParamMap,
//!     ) -> Result<Vec<String>, StageError> {
//!         Ok(vec!["--lint".to_string(), file.filename.display().to_string()])
//!     }
//! }
//!
//! # fn main() -> Result<(), husk::Error> {
//! let adapter = Adapter::builder("xlint", XLint)
//!     .output_format("regex")
//!     .option("output_regex", r"(?P<line>\d+): (?P<message>.+)")
//!     .build()?;
//! assert_eq!(adapter.executable(), "xlint");
//! # Ok(())
//! # }
//! ```

mod adapter;
mod error;
mod exec;
mod options;
mod pipeline;
mod prerequisites;

pub use adapter::{Adapter, AdapterSpec, Tool};
pub use error::{Error, Result, RunError, StageError};
pub use options::AdapterBuilder;
pub use prerequisites::PrerequisiteStatus;

// Shared types from the lower crates.
pub use husk_core::{CapturedOutput, FileContext, Finding, Issue, Patch, Severity};
pub use husk_format::{
    CorrectedFormat, Error as FormatError, FormatKind, FormatOptions, ProcessError, RegexFormat,
    ResultContext, ResultFormat,
};
pub use husk_params::{
    Error as ParamError, MergedParams, ParamMap, ParamSpec, ParamType, StageParams, merge,
};
