use tokio::process::Command;
use tracing::debug;

use crate::error::ExecError;

#[cfg(windows)]
const SHELL: [&str; 2] = ["cmd", "/C"];
#[cfg(not(windows))]
const SHELL: [&str; 2] = ["sh", "-c"];

/// Run `command` through the host's default shell and capture its output.
///
/// The command string is passed to the shell verbatim — metacharacters,
/// pipes, and redirections are interpreted by the shell, not parsed here.
/// The child inherits the parent's environment and working directory. Blocks
/// (at the task level) until the process exits: no timeout, no output cap.
///
/// Failure classification, in precedence order:
/// 1. spawn failure or non-zero exit → [`ExecError::Failed`]
/// 2. zero exit but non-empty stderr → [`ExecError::Stderr`]
///
/// Rule 2 is intentionally stricter than exit-code-based detection: any
/// stderr output fails the invocation even when the process reports success.
pub async fn execute(command: &str) -> Result<String, ExecError> {
    if command.is_empty() {
        return Err(ExecError::MissingCommand);
    }

    debug!(command, "spawning shell command");

    let output = Command::new(SHELL[0])
        .arg(SHELL[1])
        .arg(command)
        .output()
        .await
        .map_err(|err| ExecError::Failed(err.to_string()))?;

    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(ExecError::Failed(format!(
            "Command failed: {command}\n{stderr}"
        )));
    }

    if !stderr.is_empty() {
        return Err(ExecError::Stderr(stderr.into_owned()));
    }

    // Verbatim stdout: no trimming, lossy UTF-8 decode only.
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stdout_returned_verbatim() {
        let out = execute("echo hello").await.unwrap();
        assert_eq!(out, "hello\n");
    }

    #[tokio::test]
    async fn stdout_without_trailing_newline_not_trimmed() {
        let out = execute("printf 'a\\nb'").await.unwrap();
        assert_eq!(out, "a\nb");
    }

    #[tokio::test]
    async fn empty_command_fails_without_spawning() {
        let err = execute("").await.unwrap_err();
        assert!(matches!(err, ExecError::MissingCommand));
        assert_eq!(err.to_string(), "Command is required");
    }

    #[tokio::test]
    async fn stderr_fails_even_on_zero_exit() {
        let err = execute("echo oops 1>&2").await.unwrap_err();
        assert_eq!(err.to_string(), "Stderr: oops\n");
    }

    #[tokio::test]
    async fn nonzero_exit_is_error_not_stderr() {
        // Writes to stderr AND exits non-zero: the exit status wins.
        let err = execute("echo oops 1>&2; exit 3").await.unwrap_err();
        assert!(matches!(err, ExecError::Failed(_)));
        let msg = err.to_string();
        assert!(msg.starts_with("Error: Command failed: "), "got: {msg}");
        assert!(msg.contains("oops"));
    }

    #[tokio::test]
    async fn nonexistent_binary_reports_error() {
        let err = execute("nonexistent-binary-xyz").await.unwrap_err();
        assert!(err.to_string().starts_with("Error: "));
    }

    #[tokio::test]
    async fn silent_failure_still_reports_error() {
        let err = execute("exit 7").await.unwrap_err();
        assert!(matches!(err, ExecError::Failed(_)));
    }

    #[tokio::test]
    async fn shell_metacharacters_pass_through() {
        let out = execute("echo one && echo two | tr a-z A-Z").await.unwrap();
        assert_eq!(out, "one\nTWO\n");
    }
}
