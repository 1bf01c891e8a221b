// src/process.rs
//! Spawning of the external tools every collaborator is built on.
//!
//! All child processes are started here so launch failures, stdin piping
//! and non-zero exits are reported the same way for rofi, the clipboard
//! tools and the typing tools.

use crate::error::{AppError, Result};
use std::ffi::OsStr;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Captured result of a finished tool.
#[derive(Debug)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `program` to completion, optionally feeding `input` on stdin.
///
/// A non-zero exit is not an error here; see [`run_checked`].
pub fn run_tool<I, S>(program: &str, args: I, input: Option<&str>) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    log::debug!("Spawning {}", program);

    let mut child = Command::new(program)
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AppError::launch(program, e))?;

    // Feed stdin from its own thread while the outputs are drained, so a
    // child that writes before it has read all of its input cannot block us
    let stdin = child.stdin.take();
    let output = std::thread::scope(|scope| {
        let writer = scope.spawn(move || match (input, stdin) {
            (Some(content), Some(mut stdin)) => stdin.write_all(content.as_bytes()),
            _ => Ok(()),
        });

        let output = child.wait_with_output();
        match writer.join() {
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
                log::debug!("{} exited before reading all of its input", program);
            }
            Ok(Err(e)) => log::warn!("Failed to write input to {}: {}", program, e),
            Ok(Ok(())) | Err(_) => {}
        }
        output
    })
    .map_err(|e| AppError::launch(program, e))?;

    Ok(ToolOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Runs `program` and fails with [`AppError::ToolFailed`] on a non-zero exit.
pub fn run_checked<I, S>(program: &str, args: I, input: Option<&str>) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = run_tool(program, args, input)?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(AppError::ToolFailed {
            tool: program.to_string(),
            message: format!("{} {}", output.status, output.stderr.trim()),
        })
    }
}

/// Feeds `input` to a tool whose output is not needed.
///
/// Clipboard owners such as xclip and xsel fork a background process that
/// keeps serving the selection; their stdout and stderr go to null so
/// waiting does not block on that process.
pub fn feed_tool<I, S>(program: &str, args: I, input: &str) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    log::debug!("Feeding {} bytes to {}", input.len(), program);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::launch(program, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|e| AppError::launch(program, e))?;
    }

    let status = child.wait().map_err(|e| AppError::launch(program, e))?;
    if status.success() {
        Ok(())
    } else {
        Err(AppError::ToolFailed {
            tool: program.to_string(),
            message: status.to_string(),
        })
    }
}

/// Whether an executable named `program` exists on `PATH`.
pub fn is_on_path(program: &str) -> bool {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| is_executable(&dir.join(program))))
        .unwrap_or(false)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Whether the current session runs under Wayland.
pub fn is_wayland_session() -> bool {
    std::env::var_os("WAYLAND_DISPLAY").is_some()
        || std::env::var("XDG_SESSION_TYPE").is_ok_and(|s| s == "wayland")
}
