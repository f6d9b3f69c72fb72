//! Adapter declaration and validation.

use indexmap::IndexMap;

use husk_format::{FormatKind, FormatOptions, ResultFormat};

use crate::adapter::{Adapter, AdapterSpec, Tool};
use crate::{Error, Result};

const DEFAULT_PREREQUISITE_FAIL_MESSAGE: &str = "Prerequisite check failed.";

/// Collects an adapter declaration, validated as a whole by
/// [`AdapterBuilder::build`].
///
/// Fixed options have dedicated methods; format-specific options go through
/// [`AdapterBuilder::option`] and are checked against the names the selected
/// format declares.
pub struct AdapterBuilder {
    executable: String,
    tool: Box<dyn Tool>,
    use_stdin: bool,
    use_stdout: bool,
    use_stderr: bool,
    config_suffix: String,
    description: Option<String>,
    executable_check_fail_info: Option<String>,
    prerequisite_check_command: Vec<String>,
    prerequisite_check_fail_message: Option<String>,
    output_format: Option<String>,
    options: IndexMap<String, toml::Value>,
    custom: Option<Box<dyn ResultFormat>>,
}

impl AdapterBuilder {
    pub(crate) fn new(executable: String, tool: Box<dyn Tool>) -> Self {
        Self {
            executable,
            tool,
            use_stdin: false,
            use_stdout: true,
            use_stderr: false,
            config_suffix: String::new(),
            description: None,
            executable_check_fail_info: None,
            prerequisite_check_command: Vec::new(),
            prerequisite_check_fail_message: None,
            output_format: None,
            options: IndexMap::new(),
            custom: None,
        }
    }

    /// Feed the processed file to the tool over stdin instead of (or in
    /// addition to) naming it on the command line.
    pub fn use_stdin(mut self, value: bool) -> Self {
        self.use_stdin = value;
        self
    }

    pub fn use_stdout(mut self, value: bool) -> Self {
        self.use_stdout = value;
        self
    }

    pub fn use_stderr(mut self, value: bool) -> Self {
        self.use_stderr = value;
        self
    }

    /// Suffix for the materialized config file, for tools that insist on a
    /// specific file ending.
    pub fn config_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config_suffix = suffix.into();
        self
    }

    /// Description shown at the top of the generated help surface.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Extra information appended to the message when the executable is not
    /// installed.
    pub fn executable_check_fail_info(mut self, info: impl Into<String>) -> Self {
        self.executable_check_fail_info = Some(info.into());
        self
    }

    /// Secondary command run by `check_prerequisites` to confirm the tool is
    /// operational, as an argv vector.
    pub fn prerequisite_check<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisite_check_command = command.into_iter().map(Into::into).collect();
        self
    }

    /// Message reported when the prerequisite check command fails.
    pub fn prerequisite_check_fail_message(mut self, message: impl Into<String>) -> Self {
        self.prerequisite_check_fail_message = Some(message.into());
        self
    }

    /// Select a built-in output format by name (`"regex"` or `"corrected"`).
    pub fn output_format(mut self, name: impl Into<String>) -> Self {
        self.output_format = Some(name.into());
        self
    }

    /// Set a format-specific option, e.g. `output_regex` or `diff_distance`.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Supply a custom result-processing stage instead of a built-in format.
    pub fn custom_format(mut self, format: impl ResultFormat + 'static) -> Self {
        self.custom = Some(Box::new(format));
        self
    }

    /// Validate the declaration and freeze it into an [`Adapter`].
    ///
    /// Validation is pure: the same declaration always yields the same
    /// adapter or the same error, and no tool is invoked.
    pub fn build(self) -> Result<Adapter> {
        if !self.use_stdout && !self.use_stderr {
            return Err(Error::NoOutputStreamSelected);
        }

        let kind = match self.output_format.as_deref() {
            Some(name) => Some(FormatKind::from_name(name).ok_or_else(|| {
                Error::InvalidOutputFormat {
                    name: name.to_string(),
                }
            })?),
            None => None,
        };

        let allowed: &[&str] = kind.map(|k| k.option_names()).unwrap_or(&[]);
        let mut unknown: Vec<String> = self
            .options
            .keys()
            .filter(|name| !allowed.contains(&name.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(Error::UnknownOptions { names: unknown });
        }

        let stage: Box<dyn ResultFormat> = match (self.custom, kind) {
            (Some(_), Some(_)) => return Err(Error::ConflictingResultStage),
            (None, None) => return Err(Error::MissingResultStage),
            (Some(custom), None) => custom,
            (None, Some(kind)) => kind.build(FormatOptions::new(self.options))?,
        };

        let prerequisite_check_fail_message = if self.prerequisite_check_command.is_empty() {
            None
        } else {
            Some(
                self.prerequisite_check_fail_message
                    .unwrap_or_else(|| DEFAULT_PREREQUISITE_FAIL_MESSAGE.to_string()),
            )
        };

        Ok(Adapter {
            spec: AdapterSpec {
                executable: self.executable,
                use_stdin: self.use_stdin,
                use_stdout: self.use_stdout,
                use_stderr: self.use_stderr,
                config_suffix: self.config_suffix,
                description: self.description,
                executable_check_fail_info: self.executable_check_fail_info,
                prerequisite_check_command: self.prerequisite_check_command,
                prerequisite_check_fail_message,
                format: kind,
            },
            tool: self.tool,
            stage,
        })
    }
}
