//! Patch generation from tool-corrected file content.

use husk_core::{Finding, Patch, Severity};
use husk_params::ParamMap;

use crate::diff::{diff_hunks, group_hunks};
use crate::{FormatOptions, ProcessError, Result, ResultContext, ResultFormat};

const DEFAULT_MESSAGE: &str = "Inconsistency found.";

/// Treats the captured output as the corrected version of the processed file
/// and turns the line differences into patches.
#[derive(Debug)]
pub struct CorrectedFormat {
    distance: i64,
    severity: Severity,
    message: String,
}

impl CorrectedFormat {
    /// Option names this format consumes from the adapter declaration.
    pub const OPTION_NAMES: &'static [&'static str] =
        &["diff_distance", "diff_severity", "result_message"];

    /// Build the format from its declared options.
    pub fn from_options(mut options: FormatOptions) -> Result<Self> {
        Ok(Self {
            distance: options.take_int("diff_distance")?.unwrap_or(1),
            severity: options
                .take_severity("diff_severity")?
                .unwrap_or(Severity::Normal),
            message: options
                .take_str("result_message")?
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        })
    }
}

impl ResultFormat for CorrectedFormat {
    fn process(
        &self,
        ctx: &ResultContext<'_>,
        _params: &ParamMap,
    ) -> std::result::Result<Vec<Finding>, ProcessError> {
        let corrected: Vec<String> = ctx
            .output
            .primary()
            .lines()
            .map(str::to_string)
            .collect();

        let hunks = group_hunks(diff_hunks(ctx.file.lines, &corrected), self.distance);
        let patches = hunks
            .into_iter()
            .map(|hunk| {
                Finding::Patch(Patch {
                    severity: self.severity,
                    message: self.message.clone(),
                    start_line: hunk.old_start as u32 + 1,
                    end_line: (hunk.old_start + hunk.old_len) as u32,
                    replacement: corrected[hunk.new_start..hunk.new_start + hunk.new_len].to_vec(),
                })
            })
            .collect();
        Ok(patches)
    }
}
