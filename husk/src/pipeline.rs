//! The per-file execution pipeline.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, error};

use husk_core::{CapturedOutput, FileContext, Finding};
use husk_format::ResultContext;
use husk_params::ParamMap;

use crate::RunError;
use crate::adapter::Adapter;
use crate::exec;

impl Adapter {
    /// Process one file: generate the tool config, build arguments, invoke
    /// the tool, and hand the captured output to the result stage.
    ///
    /// `lines` is the file content without trailing newlines; with
    /// `use_stdin` it is joined with `\n` and fed to the tool. Failures are
    /// scoped to this file; the adapter remains valid.
    ///
    /// The invocation blocks until the tool exits; a hung tool hangs this
    /// call. Callers needing cancellation must manage the process externally.
    pub fn run(
        &self,
        filename: &Path,
        lines: &[String],
        params: &ParamMap,
    ) -> Result<Vec<Finding>, RunError> {
        self.metadata().check_unknown(params)?;
        let file = FileContext::new(filename, lines);

        let routed = self.tool.config_params().route(params)?;
        let content = self
            .tool
            .generate_config(&file, &routed)
            .map_err(|source| {
                error!(file = %filename.display(), "config stage failed: {source}");
                RunError::ConfigStage { source }
            })?;

        // Holding the handle keeps the temp file alive for the invocation;
        // dropping it on any exit path below removes the file.
        let config_file = match content {
            Some(content) => Some(self.write_config(&content)?),
            None => None,
        };
        let config_path = config_file.as_ref().map(|file| file.path());

        let routed = self.tool.argument_params().route(params)?;
        let args = self
            .tool
            .create_arguments(&file, config_path, &routed)
            .map_err(|source| {
                error!(file = %filename.display(), "argument stage failed: {source}");
                RunError::ArgumentsStage { source }
            })?;

        debug!("running '{} {}'", self.spec.executable, args.join(" "));
        let stdin = self.spec.use_stdin.then(|| file.joined());
        let raw = exec::run_captured(&self.spec.executable, &args, stdin).map_err(|source| {
            RunError::Spawn {
                executable: self.spec.executable.clone(),
                source,
            }
        })?;

        let output = CapturedOutput::reduce(
            raw.stdout,
            raw.stderr,
            self.spec.use_stdout,
            self.spec.use_stderr,
        );
        let ctx = ResultContext {
            output: &output,
            file: &file,
            origin: &self.spec.executable,
            exit_code: raw.status.code(),
        };
        let routed = self.stage.params().route(params)?;
        Ok(self.stage.process(&ctx, &routed)?)
    }

    fn write_config(&self, content: &str) -> Result<NamedTempFile, RunError> {
        let mut file = tempfile::Builder::new()
            .suffix(&self.spec.config_suffix)
            .tempfile()
            .map_err(|source| RunError::ConfigFile { source })?;
        file.write_all(content.as_bytes())
            .map_err(|source| RunError::ConfigFile { source })?;
        Ok(file)
    }
}
