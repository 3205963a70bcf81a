//! Shell command execution for test cases.

use crate::error::{JudgeconfError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::platform::{shell_flag, shell_program};

/// Result of executing a shell command.
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

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Text written to the command's standard input. `None` closes stdin.
    pub stdin: Option<String>,
}

/// Execute a command through the platform shell, capturing its output.
///
/// A non-zero exit is a normal result; only failure to start the shell is
/// an error.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(shell_program());
    cmd.arg(shell_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.stdin(if options.stdin.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    let mut child = cmd.spawn().map_err(|_| JudgeconfError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    // Feed stdin from a separate thread so a chatty child cannot block us
    // while its stdout pipe fills up.
    let writer = match (child.stdin.take(), options.stdin.clone()) {
        (Some(mut pipe), Some(input)) => Some(thread::spawn(move || {
            // The child may exit without reading; a broken pipe is fine.
            let _ = pipe.write_all(input.as_bytes());
        })),
        _ => None,
    };

    let output = child
        .wait_with_output()
        .map_err(|_| JudgeconfError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    if let Some(handle) = writer {
        let _ = handle.join();
    }

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Execute a command in `cwd` with the given stdin.
pub fn execute_in(command: &str, cwd: &Path, stdin: Option<&str>) -> Result<CommandResult> {
    let options = CommandOptions {
        cwd: Some(cwd.to_path_buf()),
        stdin: stdin.map(str::to_string),
    };
    execute(command, &options)
}
