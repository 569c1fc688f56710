// src/core/command.rs

use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("`{0}` not found on PATH")]
    NotFound(String),
    #[error("`{program}` {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("`{0}` timed out after {1:?}")]
    TimedOut(String, Duration),
    #[error("running `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Run an external tool with piped output and a hard deadline.
///
/// The child is killed when the deadline elapses, so a hung tool cannot
/// stall the caller past `limit`. A spawn failure of kind `NotFound` maps
/// to `CommandError::NotFound`, which is how callers tell "tool absent"
/// apart from "tool present but broken".
pub async fn run_with_timeout(
    program: &str,
    args: &[&str],
    limit: Duration,
) -> Result<String, CommandError> {
    let child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound(program.to_owned()),
            _ => CommandError::Io {
                program: program.to_owned(),
                source: e,
            },
        })?;

    // On timeout the wait future is dropped, and kill_on_drop takes the
    // child process down with it.
    let output = match tokio::time::timeout(limit, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            return Err(CommandError::Io {
                program: program.to_owned(),
                source: e,
            });
        }
        Err(_) => return Err(CommandError::TimedOut(program.to_owned(), limit)),
    };

    if !output.status.success() {
        return Err(CommandError::Failed {
            program: program.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
