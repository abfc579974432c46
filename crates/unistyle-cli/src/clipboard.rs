//! Writing rendered text to the system clipboard.
//!
//! The clipboard is reached through the platform's copy command (`pbcopy`,
//! `xclip`), fed on stdin and killed if it hangs.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use wait_timeout::ChildExt;

/// How long a copy command may run before it is killed.
pub const COPY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command is known for this platform")]
    Unsupported,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Command `{0}` failed with status {1}")]
    CommandFailed(String, ExitStatus),
}

/// The copy command for macOS.
#[cfg(target_os = "macos")]
pub fn clipboard_command() -> Option<&'static str> {
    Some("pbcopy")
}

/// The copy command for Linux (xclip).
#[cfg(target_os = "linux")]
pub fn clipboard_command() -> Option<&'static str> {
    Some("xclip -selection clipboard")
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn clipboard_command() -> Option<&'static str> {
    None
}

/// Copies `text` to the system clipboard.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let command = clipboard_command().ok_or(ClipboardError::Unsupported)?;
    tracing::debug!(command, bytes = text.len(), "copying to clipboard");
    pipe_to(command, text, COPY_TIMEOUT)
}

/// Runs a shell command with `input` on its stdin, discarding its output.
pub fn pipe_to(command_str: &str, input: &str, timeout: Duration) -> Result<(), ClipboardError> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_str);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_str);
        c
    };

    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    match child.wait_timeout(timeout)? {
        Some(status) if status.success() => Ok(()),
        Some(status) => Err(ClipboardError::CommandFailed(
            command_str.to_string(),
            status,
        )),
        None => {
            child.kill()?;
            Err(ClipboardError::Timeout(command_str.to_string(), timeout))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_to_consumes_input() {
        pipe_to("cat > /dev/null", "𝐁𝐨𝐥𝐝", Duration::from_secs(5)).unwrap();
    }

    #[test]
    fn test_pipe_to_reports_failure_with_command() {
        match pipe_to("exit 3", "", Duration::from_secs(5)) {
            Err(ClipboardError::CommandFailed(cmd, status)) => {
                assert_eq!(cmd, "exit 3");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_pipe_to_times_out() {
        let start = std::time::Instant::now();
        let res = pipe_to("sleep 2", "", Duration::from_millis(300));
        assert!(matches!(res, Err(ClipboardError::Timeout(_, _))));
        assert!(start.elapsed() < Duration::from_secs(2));
    }
}
