//! On-demand prerequisite checking for the wrapped tool.

use std::process::{Command, Stdio};

use crate::adapter::Adapter;

/// Outcome of [`Adapter::check_prerequisites`].
///
/// A status value rather than an error: callers present it to users without
/// special-casing, and a failing tool is an expected condition, not a bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrerequisiteStatus {
    /// The tool is installed and, if a check command is configured,
    /// operational.
    Ok,
    /// The executable was not found on `PATH`.
    Missing(String),
    /// The executable exists but the configured check command failed.
    CheckFailed(String),
}

impl PrerequisiteStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, PrerequisiteStatus::Ok)
    }
}

impl Adapter {
    /// Check whether the wrapped tool is present and operational.
    ///
    /// Computed fresh on every call; tool availability can change between
    /// calls, so nothing is cached.
    pub fn check_prerequisites(&self) -> PrerequisiteStatus {
        if which::which(&self.spec.executable).is_err() {
            let mut message = format!("'{}' is not installed.", self.spec.executable);
            if let Some(info) = &self.spec.executable_check_fail_info {
                message.push(' ');
                message.push_str(info);
            }
            return PrerequisiteStatus::Missing(message);
        }

        let Some((program, args)) = self.spec.prerequisite_check_command.split_first() else {
            return PrerequisiteStatus::Ok;
        };
        let check = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match check {
            Ok(status) if status.success() => PrerequisiteStatus::Ok,
            _ => PrerequisiteStatus::CheckFailed(
                self.spec
                    .prerequisite_check_fail_message
                    .clone()
                    .unwrap_or_default(),
            ),
        }
    }
}
