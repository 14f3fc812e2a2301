use thiserror::Error;

/// Outcome of a failed command invocation.
///
/// The `Display` strings are wire-visible: `Failed` and `Stderr` are returned
/// verbatim as tool output text, `MissingCommand` becomes the protocol-level
/// invalid-params message.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Command is required")]
    MissingCommand,

    /// The process could not be launched, or exited with a non-zero status.
    #[error("Error: {0}")]
    Failed(String),

    /// The process exited successfully but wrote to stderr. Any diagnostic
    /// output classifies the whole invocation as failed, regardless of exit
    /// code.
    #[error("Stderr: {0}")]
    Stderr(String),
}
