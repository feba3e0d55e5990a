//! Error types for command dispatch.
//!
//! The `ShellError` enum represents every failure a built-in or external
//! command can report. Errors are caught at the point of detection, printed,
//! and never terminate the shell loop.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Command dispatch error type.
///
/// Each variant carries enough context to print a specific message naming
/// the offending path or command. OS failures keep the underlying
/// `io::Error` so the OS-provided reason is part of the message.
#[derive(Debug)]
pub enum ShellError {
    /// Missing or invalid arguments for a built-in
    Usage {
        /// Syntax summary of the misused command
        usage: &'static str,
    },

    /// Target of `cd` / `ld` is not an existing directory
    DirectoryNotFound(PathBuf),

    /// Target of `cat` / `rm` is not an existing regular file
    FileNotFound(PathBuf),

    /// `util` script (or its scripts directory) is absent
    ScriptNotFound(PathBuf),

    /// `mkdir` target already names a directory
    AlreadyExists(PathBuf),

    /// The OS rejected a create/delete/change-directory call
    Os {
        /// Operation that failed (e.g. "create directory")
        action: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// OS-provided reason
        source: io::Error,
    },

    /// An external process could not be created
    Spawn {
        /// The command line that failed to start
        command: String,
        /// OS-provided reason
        source: io::Error,
    },

    /// A file read failed after streaming had begun
    ReadFailed {
        /// File being streamed
        path: PathBuf,
        /// OS-provided reason
        source: io::Error,
    },
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Usage { usage } => write!(f, "usage: {}", usage),
            ShellError::DirectoryNotFound(path) => {
                write!(f, "directory does not exist: {}", path.display())
            }
            ShellError::FileNotFound(path) => {
                write!(f, "file does not exist: {}", path.display())
            }
            ShellError::ScriptNotFound(path) => {
                write!(f, "script does not exist: {}", path.display())
            }
            ShellError::AlreadyExists(path) => {
                write!(f, "already exists: {}", path.display())
            }
            ShellError::Os {
                action,
                path,
                source,
            } => {
                write!(f, "could not {} {}: {}", action, path.display(), source)
            }
            ShellError::Spawn { command, source } => {
                write!(f, "could not run '{}': {}", command, source)
            }
            ShellError::ReadFailed { path, source } => {
                write!(f, "read failed for {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Os { source, .. }
            | ShellError::Spawn { source, .. }
            | ShellError::ReadFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
