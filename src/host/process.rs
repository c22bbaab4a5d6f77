//! Process execution with captured output.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::Result;

/// Result of running a program to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Standard output followed by standard error, for diagnostics.
    pub fn combined_output(&self) -> String {
        let mut combined = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&self.stderr);
        }
        combined
    }
}

/// Runs a program and captures its output.
pub trait ProcessRunner {
    /// Run `program` with `args`, wait for it, and capture stdout and stderr.
    ///
    /// A program that runs and exits non-zero is `Ok` with
    /// `success == false`; only a failure to start it is an `Err`.
    fn run_capture(&self, program: &Path, args: &[&str]) -> Result<CommandResult>;
}

/// [`ProcessRunner`] backed by `std::process::Command`.
///
/// The program is started directly, not through a shell, so arguments such
/// as `*` reach it verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run_capture(&self, program: &Path, args: &[&str]) -> Result<CommandResult> {
        let start = Instant::now();

        tracing::debug!("Running {}", command_line(program, args));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}

/// Render a program and its arguments as a single display string.
pub fn command_line(program: &Path, args: &[&str]) -> String {
    let mut line = format!("\"{}\"", program.display());
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_quotes_program_only() {
        let line = command_line(
            Path::new("/pf/Installer/vswhere.exe"),
            &["-products", "*", "-format", "xml"],
        );
        assert_eq!(line, "\"/pf/Installer/vswhere.exe\" -products * -format xml");
    }

    #[test]
    fn combined_output_joins_streams() {
        let result = CommandResult::failure(
            Some(1),
            "out".to_string(),
            "err\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.combined_output(), "out\nerr\n");
    }

    #[test]
    fn combined_output_without_stderr_is_stdout() {
        let result = CommandResult::success("only".to_string(), String::new(), Duration::ZERO);
        assert_eq!(result.combined_output(), "only");
    }

    #[cfg(unix)]
    #[test]
    fn run_capture_successful_program() {
        let result = SystemProcessRunner
            .run_capture(Path::new("sh"), &["-c", "echo hello"])
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn run_capture_failing_program() {
        let result = SystemProcessRunner
            .run_capture(Path::new("sh"), &["-c", "echo oops >&2; exit 3"])
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn run_capture_missing_program_is_an_error() {
        let result =
            SystemProcessRunner.run_capture(Path::new("this-program-does-not-exist-12345"), &[]);
        assert!(result.is_err());
    }
}
