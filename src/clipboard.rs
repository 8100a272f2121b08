//! Clipboard surface
//!
//! Primary path pipes the text into a system clipboard command.
//! Fallback path emits an OSC 52 escape so the terminal itself sets the
//! clipboard (works over SSH and in most modern terminals).

use crate::error::ClipboardError;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Clipboard commands tried in order when none is configured
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip.exe", &[]),
];

/// Two-tier clipboard access
pub trait Clipboard {
    /// Preferred mechanism
    fn write_primary(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Synchronous fallback used when the primary path fails
    fn write_fallback(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via external command, OSC 52 fallback
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
    osc52_fallback: bool,
}

impl SystemClipboard {
    /// `command` overrides autodetection; an empty list is treated as unset
    pub fn new(command: Option<Vec<String>>, osc52_fallback: bool) -> Self {
        let command = command.filter(|c| !c.is_empty()).or_else(detect_command);
        if let Some(cmd) = &command {
            tracing::debug!(command = %cmd.join(" "), "using clipboard command");
        } else {
            tracing::debug!("no clipboard command found on PATH");
        }
        Self {
            command,
            osc52_fallback,
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_primary(&mut self, text: &str) -> Result<(), ClipboardError> {
        let cmd = self.command.as_ref().ok_or(ClipboardError::Unavailable)?;
        run_copy_command(cmd, text)
    }

    fn write_fallback(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.osc52_fallback {
            return Err(ClipboardError::Unavailable);
        }
        let mut stdout = std::io::stdout();
        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Build the OSC 52 "set clipboard" escape for `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

fn run_copy_command(cmd: &[String], text: &str) -> Result<(), ClipboardError> {
    let (program, args) = cmd.split_first().ok_or(ClipboardError::Unavailable)?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed {
            command: program.clone(),
            reason: e.to_string(),
        })?;

    // stdin is dropped at the end of the arm so the child sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    // Always reap the child, even when it stopped reading early
    let status = child.wait()?;
    written.map_err(|e| ClipboardError::CommandFailed {
        command: program.clone(),
        reason: format!("writing stdin: {}", e),
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed {
            command: program.clone(),
            reason: format!("exited with {}", status),
        })
    }
}

/// Find the first known clipboard command on PATH
fn detect_command() -> Option<Vec<String>> {
    let path = std::env::var_os("PATH")?;
    let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();

    CANDIDATES
        .iter()
        .find(|(program, _)| dirs.iter().any(|d| d.join(program).is_file()))
        .map(|(program, args)| {
            std::iter::once(program.to_string())
                .chain(args.iter().map(|a| a.to_string()))
                .collect()
        })
}
