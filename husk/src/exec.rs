//! Synchronous subprocess invocation with captured streams.

use std::io::{self, ErrorKind, Write};
use std::process::{Command, ExitStatus, Stdio};

/// Everything captured from one finished tool invocation.
#[derive(Debug)]
pub(crate) struct RawOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitStatus,
}

/// Run `executable args...`, optionally feeding `stdin`, and capture both
/// streams. Blocks until the tool exits; there is no timeout.
pub(crate) fn run_captured(
    executable: &str,
    args: &[String],
    stdin: Option<String>,
) -> io::Result<RawOutput> {
    let mut command = Command::new(executable);
    command
        .args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn()?;
    if let Some(input) = stdin {
        if let Some(mut handle) = child.stdin.take() {
            // A tool may legitimately exit before reading all of its stdin.
            match handle.write_all(input.as_bytes()) {
                Err(err) if err.kind() == ErrorKind::BrokenPipe => {}
                other => other?,
            }
        }
    }

    let output = child.wait_with_output()?;
    Ok(RawOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: output.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout() {
        let out = run_captured("echo", &["hello".to_string()], None).unwrap();
        assert_eq!(out.stdout, "hello\n");
        assert_eq!(out.stderr, "");
        assert!(out.status.success());
    }

    #[test]
    fn test_feeds_stdin() {
        let out = run_captured("cat", &[], Some("a\nb".to_string())).unwrap();
        assert_eq!(out.stdout, "a\nb");
    }

    #[test]
    fn test_captures_stderr_and_status() {
        let args = vec!["-c".to_string(), "echo oops 1>&2; exit 3".to_string()];
        let out = run_captured("sh", &args, None).unwrap();
        assert_eq!(out.stderr, "oops\n");
        assert_eq!(out.status.code(), Some(3));
    }

    #[test]
    fn test_missing_executable_is_an_io_error() {
        assert!(run_captured("definitely-not-a-real-tool", &[], None).is_err());
    }
}
