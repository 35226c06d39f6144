//! External command invocation
//!
//! Every collaborator (monitor query, profile tool) is reached through
//! [`CommandRunner`] so callers can be exercised without the real binaries.

use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

/// Failures talking to an external collaborator
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}{}", stderr_suffix(.stderr))]
    NonZeroExit {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("failed to parse {program} output: {reason}")]
    Parse { program: String, reason: String },

    #[error("failed to apply profile '{profile}': {reason}")]
    Apply { profile: String, reason: String },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Runs external programs synchronously
pub trait CommandRunner {
    /// Run to completion and capture stdout. Non-zero exit is an error.
    fn output(&self, program: &str, args: &[&str]) -> Result<String, CollaboratorError>;

    /// Run to completion with all output discarded. Non-zero exit is an error.
    fn status(&self, program: &str, args: &[&str]) -> Result<(), CollaboratorError>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn output(&self, program: &str, args: &[&str]) -> Result<String, CollaboratorError> {
        debug!(program, ?args, "Running collaborator");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| CollaboratorError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(program, status = %output.status, "Collaborator exited unsuccessfully");
            return Err(CollaboratorError::NonZeroExit {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn status(&self, program: &str, args: &[&str]) -> Result<(), CollaboratorError> {
        debug!(program, ?args, "Running collaborator (output discarded)");
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CollaboratorError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            warn!(program, %status, "Collaborator exited unsuccessfully");
            return Err(CollaboratorError::NonZeroExit {
                program: program.to_string(),
                status: status.to_string(),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_runner_missing_binary_is_spawn_error() {
        let err = SystemRunner
            .output("hyprmon-widget-definitely-not-installed", &[])
            .unwrap_err();
        assert!(matches!(err, CollaboratorError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout() {
        let out = SystemRunner.output("sh", &["-c", "echo hello"]).unwrap();
        assert_eq!(out, "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_non_zero_exit() {
        let err = SystemRunner.status("sh", &["-c", "exit 3"]).unwrap_err();
        assert!(matches!(err, CollaboratorError::NonZeroExit { .. }));

        let err = SystemRunner
            .output("sh", &["-c", "echo broken >&2; exit 1"])
            .unwrap_err();
        assert!(err.to_string().ends_with(": broken"));
    }

    #[test]
    fn test_apply_error_names_profile() {
        let err = CollaboratorError::Apply {
            profile: "work".to_string(),
            reason: "exit status: 1".to_string(),
        };
        assert_eq!(err.to_string(), "failed to apply profile 'work': exit status: 1");
    }
}
