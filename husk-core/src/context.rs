//! Per-call context values handed to processing stages.

use std::path::Path;

/// The file currently being processed, as a borrowed view.
///
/// Lines carry no trailing newline; stages that need the flat content join
/// them with `\n`.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    pub filename: &'a Path,
    pub lines: &'a [String],
}

impl<'a> FileContext<'a> {
    pub fn new(filename: &'a Path, lines: &'a [String]) -> Self {
        Self { filename, lines }
    }

    /// The file content as a single string, lines joined with `\n`.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

/// Captured process output reduced to the adapter's active streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedOutput {
    /// Exactly one stream was selected.
    Single(String),
    /// Both streams were selected.
    Pair { stdout: String, stderr: String },
}

impl CapturedOutput {
    /// Reduce raw stdout/stderr to the selected subset.
    ///
    /// Adapter validation guarantees at least one stream is selected; with
    /// none selected this falls back to an empty single stream.
    pub fn reduce(stdout: String, stderr: String, use_stdout: bool, use_stderr: bool) -> Self {
        match (use_stdout, use_stderr) {
            (true, true) => CapturedOutput::Pair { stdout, stderr },
            (true, false) => CapturedOutput::Single(stdout),
            (false, true) => CapturedOutput::Single(stderr),
            (false, false) => CapturedOutput::Single(String::new()),
        }
    }

    /// The active streams in scan order: the single stream, or stdout then
    /// stderr.
    pub fn streams(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            CapturedOutput::Single(text) => (text.as_str(), None),
            CapturedOutput::Pair { stdout, stderr } => (stdout.as_str(), Some(stderr.as_str())),
        };
        std::iter::once(first).chain(second)
    }

    /// The stream holding a tool's primary payload: the single stream, or
    /// stdout when both are captured.
    pub fn primary(&self) -> &str {
        match self {
            CapturedOutput::Single(text) => text,
            CapturedOutput::Pair { stdout, .. } => stdout,
        }
    }
}
