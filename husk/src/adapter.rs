//! The adapter value binding one external tool to the framework.

use std::fmt;
use std::path::Path;

use husk_core::FileContext;
use husk_format::{FormatKind, ResultFormat};
use husk_params::{MergedParams, ParamMap, StageParams, merge};

use crate::StageError;
use crate::options::AdapterBuilder;

/// The user-defined side of an adapter: how to configure the wrapped tool
/// and how to call it.
///
/// Each stage declares the named settings it accepts; the pipeline routes the
/// caller's flat settings map accordingly, so a setting declared on one stage
/// never needs re-declaring on another.
pub trait Tool: Send + Sync {
    /// Settings accepted by the config-generation stage.
    fn config_params(&self) -> StageParams {
        StageParams::default()
    }

    /// Content of a config file the tool needs, or `None` for no config.
    ///
    /// Returned content is written to a temporary file whose path is handed
    /// to [`Tool::create_arguments`]; the file is removed when the run ends.
    fn generate_config(
        &self,
        file: &FileContext<'_>,
        params: &ParamMap,
    ) -> Result<Option<String>, StageError> {
        let _ = (file, params);
        Ok(None)
    }

    /// Settings accepted by the argument-construction stage.
    fn argument_params(&self) -> StageParams {
        StageParams::default()
    }

    /// Command-line arguments for the tool. `config_file` is the path of the
    /// materialized config, absent when [`Tool::generate_config`] produced
    /// none.
    fn create_arguments(
        &self,
        file: &FileContext<'_>,
        config_file: Option<&Path>,
        params: &ParamMap,
    ) -> Result<Vec<String>, StageError>;
}

/// The validated, immutable description of one wrapped tool.
#[derive(Debug, Clone)]
pub struct AdapterSpec {
    pub executable: String,
    pub use_stdin: bool,
    pub use_stdout: bool,
    pub use_stderr: bool,
    /// Suffix for the materialized config file, e.g. `".xml"`.
    pub config_suffix: String,
    pub description: Option<String>,
    /// Extra information appended when the executable is not found.
    pub executable_check_fail_info: Option<String>,
    /// Secondary command confirming the tool is operational; empty for none.
    pub prerequisite_check_command: Vec<String>,
    /// Message reported when the check command fails; present exactly when a
    /// check command is configured.
    pub prerequisite_check_fail_message: Option<String>,
    /// The selected built-in format, `None` when a custom stage is used.
    pub format: Option<FormatKind>,
}

/// A declared adapter: validated spec, tool stages, and the selected
/// result-processing stage.
///
/// Built once per tool via [`Adapter::builder`] and read-only afterwards;
/// all per-file state lives inside [`Adapter::run`], so one adapter may
/// process many files, concurrently if the caller wishes.
pub struct Adapter {
    pub(crate) spec: AdapterSpec,
    pub(crate) tool: Box<dyn Tool>,
    pub(crate) stage: Box<dyn ResultFormat>,
}

impl Adapter {
    /// Start declaring an adapter around `executable`.
    pub fn builder(executable: impl Into<String>, tool: impl Tool + 'static) -> AdapterBuilder {
        AdapterBuilder::new(executable.into(), Box::new(tool))
    }

    pub fn spec(&self) -> &AdapterSpec {
        &self.spec
    }

    pub fn executable(&self) -> &str {
        &self.spec.executable
    }

    /// The adapter's full accepted settings surface, for documentation and
    /// help generation.
    ///
    /// Duplicate names across stages resolve in favor of the
    /// argument-construction stage, then config-generation, then
    /// result-processing.
    pub fn metadata(&self) -> MergedParams {
        let merged = merge([
            self.tool.argument_params(),
            self.tool.config_params(),
            self.stage.params(),
        ]);
        let note = format!(
            "This adapter wraps the '{}' executable.",
            self.spec.executable
        );
        let description = match &self.spec.description {
            Some(text) => format!("{text}\n\n{note}"),
            None => note,
        };
        merged.with_description(description)
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Adapter wrapping '{}'>", self.spec.executable)
    }
}
