//! Command dispatch: built-in handlers and the external-process path.
//!
//! `dispatch()` inspects the first token against a fixed decision order,
//! first match wins. Once a built-in name matches there is no fallthrough:
//! a misused built-in reports its own error instead of being handed to an
//! external process. Every failure is caught where it is detected, printed,
//! and folded into an [`Outcome`], so nothing propagates past the
//! dispatcher and the shell loop always continues.

use core::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::io::CharIo;
use crate::platform::Platform;

use super::prompt::PromptState;
use super::tokenizer::join_quoted;

/// Fixed built-in summary printed by `help` when no help resource exists.
const HELP_SUMMARY: &str = "Built-in commands:\r\n\
  cd <dir>               Change the working directory\r\n\
  cls                    Clear the screen\r\n\
  ld [dir]               List directory contents\r\n\
  cat <file>             Print a file line by line\r\n\
  help                   Show this help\r\n\
  mkdir <dir>            Create a directory\r\n\
  rm <file>              Delete a file\r\n\
  util <name> [args...]  Run an installed script\r\n\
Anything else is spawned as an external command.\r\n\
Type 'exit' or 'ez' to leave the shell.\r\n";

/// Command classification of a first token.
///
/// One tag per built-in handler; `External` is the fallback for any name
/// outside the built-in set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// `util <name> [args...]` - run an installed script
    Util,
    /// `cd <dir>` - change working directory
    Cd,
    /// `cls` - clear screen
    Cls,
    /// `ld [dir]` - list directory
    Ld,
    /// `cat <file>` - print file contents
    Cat,
    /// `help` - show help
    Help,
    /// `mkdir <dir>` - create directory
    Mkdir,
    /// `rm <file>` - delete file
    Rm,
    /// `exit` / `ez` - terminate the shell
    Exit,
    /// Anything else - spawn as external process
    External,
}

impl CommandKind {
    /// Classify a first token by exact name, in the dispatch decision order.
    pub fn classify(name: &str) -> Self {
        match name {
            "util" => CommandKind::Util,
            "cd" => CommandKind::Cd,
            "cls" => CommandKind::Cls,
            "ld" => CommandKind::Ld,
            "cat" => CommandKind::Cat,
            "help" => CommandKind::Help,
            "mkdir" => CommandKind::Mkdir,
            "rm" => CommandKind::Rm,
            "exit" | "ez" => CommandKind::Exit,
            _ => CommandKind::External,
        }
    }
}

/// Result of dispatching one token list.
///
/// Failures carry no payload here: the message was already printed by the
/// handler that detected them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Built-in completed successfully (includes the empty no-op line)
    Success,

    /// Built-in failed; the failure was already reported
    Failure,

    /// External process ran to termination with this exit code
    ExternalExit(i32),

    /// `exit`/`ez` sentinel observed: terminate the loop
    ExitRequested,
}

/// Command dispatcher owning the platform capabilities.
///
/// Generic over:
/// - `P`: Platform (OS capabilities)
/// - `C`: ShellConfig (fixed text and script resolution constants)
pub struct Dispatcher<P, C>
where
    P: Platform,
    C: ShellConfig,
{
    platform: P,
    _config: PhantomData<C>,
}

impl<P, C> Dispatcher<P, C>
where
    P: Platform,
    C: ShellConfig,
{
    /// Create a dispatcher around the given platform.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            _config: PhantomData,
        }
    }

    /// Shared access to the platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the platform.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Dispatch one token list.
    ///
    /// `prompt` is mutated only by a successful `cd`. An empty token list
    /// is a no-op success.
    pub fn dispatch<IO: CharIo>(
        &mut self,
        io: &mut IO,
        tokens: &[String],
        prompt: &mut PromptState,
    ) -> Result<Outcome, IO::Error> {
        let Some(first) = tokens.first() else {
            return Ok(Outcome::Success);
        };

        match CommandKind::classify(first) {
            CommandKind::Util => self.cmd_util(io, tokens),
            CommandKind::Cd => self.cmd_cd(io, tokens, prompt),
            CommandKind::Cls => self.cmd_cls(io),
            CommandKind::Ld => self.cmd_ld(io, tokens),
            CommandKind::Cat => self.cmd_cat(io, tokens),
            CommandKind::Help => self.cmd_help(io, tokens),
            CommandKind::Mkdir => self.cmd_mkdir(io, tokens),
            CommandKind::Rm => self.cmd_rm(io, tokens),
            // The sentinel terminates only as the sole token on the line;
            // "exit something" is an external command like any other.
            CommandKind::Exit if tokens.len() == 1 => {
                io.write_str(C::MSG_FAREWELL)?;
                Ok(Outcome::ExitRequested)
            }
            CommandKind::Exit | CommandKind::External => self.run_external(io, tokens),
        }
    }

    /// Print a command failure and fold it into an outcome.
    fn report<IO: CharIo>(io: &mut IO, err: &ShellError) -> Result<Outcome, IO::Error> {
        io.write_str("Error: ")?;
        io.write_str(&err.to_string())?;
        io.write_str("\r\n")?;
        Ok(Outcome::Failure)
    }

    /// Print a non-fatal warning.
    fn warn<IO: CharIo>(io: &mut IO, msg: &str) -> Result<(), IO::Error> {
        io.write_str("Warning: ")?;
        io.write_str(msg)?;
        io.write_str("\r\n")
    }

    /// `util <name> [args...]`: resolve an installed script and tail-call
    /// into the generic external path with a synthesized command line.
    fn cmd_util<IO: CharIo>(
        &mut self,
        io: &mut IO,
        tokens: &[String],
    ) -> Result<Outcome, IO::Error> {
        let Some(name) = tokens.get(1) else {
            return Self::report(io, &ShellError::Usage {
                usage: "util <name> [args...]",
            });
        };

        let install_dir = match self.platform.install_dir() {
            Ok(dir) => dir,
            Err(source) => {
                return Self::report(io, &ShellError::Os {
                    action: "locate install directory of",
                    path: PathBuf::from("<self>"),
                    source,
                });
            }
        };

        let scripts_dir = install_dir.join(C::SCRIPT_DIR);
        if !self.platform.is_directory(&scripts_dir) {
            return Self::report(io, &ShellError::ScriptNotFound(scripts_dir));
        }

        let script = scripts_dir.join(format!("{}.{}", name, C::SCRIPT_EXTENSION));
        if !self.platform.is_file(&script) {
            return Self::report(io, &ShellError::ScriptNotFound(script));
        }

        let mut argv = Vec::with_capacity(tokens.len());
        argv.push(C::SCRIPT_INTERPRETER.to_string());
        argv.push(script.display().to_string());
        argv.extend(tokens[2..].iter().cloned());
        self.run_external(io, &argv)
    }

    /// `cd <dir>`: change the working directory and update prompt state.
    fn cmd_cd<IO: CharIo>(
        &mut self,
        io: &mut IO,
        tokens: &[String],
        prompt: &mut PromptState,
    ) -> Result<Outcome, IO::Error> {
        let Some(target) = tokens.get(1) else {
            return Self::report(io, &ShellError::Usage { usage: "cd <dir>" });
        };
        let target = Path::new(target);

        if !self.platform.is_directory(target) {
            return Self::report(io, &ShellError::DirectoryNotFound(target.to_path_buf()));
        }

        if let Err(source) = self.platform.change_dir(target) {
            return Self::report(io, &ShellError::Os {
                action: "change directory to",
                path: target.to_path_buf(),
                source,
            });
        }

        // Re-read the absolute directory; the prompt only mutates once the
        // change is confirmed.
        match self.platform.current_dir() {
            Ok(absolute) => {
                prompt.set_directory(absolute);
                Ok(Outcome::Success)
            }
            Err(source) => Self::report(io, &ShellError::Os {
                action: "read working directory after entering",
                path: target.to_path_buf(),
                source,
            }),
        }
    }

    /// `cls`: clear the screen; a failure is a warning, not an error.
    fn cmd_cls<IO: CharIo>(&mut self, io: &mut IO) -> Result<Outcome, IO::Error> {
        match self.platform.clear_screen() {
            Ok(()) => Ok(Outcome::Success),
            Err(e) => {
                Self::warn(io, &format!("could not clear screen: {}", e))?;
                Ok(Outcome::Failure)
            }
        }
    }

    /// `ld [dir]`: list one directory level, `.`/`..` excluded.
    fn cmd_ld<IO: CharIo>(
        &mut self,
        io: &mut IO,
        tokens: &[String],
    ) -> Result<Outcome, IO::Error> {
        let target = tokens
            .get(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        if !self.platform.is_directory(&target) {
            return Self::report(io, &ShellError::DirectoryNotFound(target));
        }

        let listing = match self.platform.list_entries(&target) {
            Ok(listing) => listing,
            Err(source) => {
                return Self::report(io, &ShellError::Os {
                    action: "list directory",
                    path: target,
                    source,
                });
            }
        };

        for entry in &listing.entries {
            if entry.is_directory {
                io.write_str(&format!("{}  [DIR]\r\n", entry.name))?;
            } else {
                io.write_str(&format!("{}  {}\r\n", entry.name, entry.size_bytes))?;
            }
        }

        // Entries already shown are not retracted on a partial failure.
        if let Some(err) = &listing.truncated {
            Self::warn(io, &format!("listing may be incomplete: {}", err))?;
        }

        Ok(Outcome::Success)
    }

    /// `cat <file>`: stream a regular file line by line.
    fn cmd_cat<IO: CharIo>(
        &mut self,
        io: &mut IO,
        tokens: &[String],
    ) -> Result<Outcome, IO::Error> {
        let Some(target) = tokens.get(1) else {
            return Self::report(io, &ShellError::Usage { usage: "cat <file>" });
        };
        let target = Path::new(target);

        if !self.platform.is_file(target) {
            return Self::report(io, &ShellError::FileNotFound(target.to_path_buf()));
        }

        let lines = match self.platform.read_lines(target) {
            Ok(lines) => lines,
            Err(source) => {
                return Self::report(io, &ShellError::Os {
                    action: "open",
                    path: target.to_path_buf(),
                    source,
                });
            }
        };

        for line in lines {
            match line {
                Ok(line) => {
                    io.write_str(&line)?;
                    io.write_str("\r\n")?;
                }
                // Distinct from "file not found": streaming had begun.
                Err(source) => {
                    return Self::report(io, &ShellError::ReadFailed {
                        path: target.to_path_buf(),
                        source,
                    });
                }
            }
        }

        Ok(Outcome::Success)
    }

    /// `help`: stream the help resource if installed, else the built-in
    /// summary.
    fn cmd_help<IO: CharIo>(
        &mut self,
        io: &mut IO,
        tokens: &[String],
    ) -> Result<Outcome, IO::Error> {
        if tokens.len() > 1 {
            return Self::report(io, &ShellError::Usage { usage: "help" });
        }

        if let Ok(install_dir) = self.platform.install_dir() {
            let resource = install_dir.join(C::HELP_RESOURCE);
            if self.platform.is_file(&resource) {
                if let Ok(lines) = self.platform.read_lines(&resource) {
                    for line in lines {
                        match line {
                            Ok(line) => {
                                io.write_str(&line)?;
                                io.write_str("\r\n")?;
                            }
                            Err(source) => {
                                return Self::report(io, &ShellError::ReadFailed {
                                    path: resource,
                                    source,
                                });
                            }
                        }
                    }
                    return Ok(Outcome::Success);
                }
            }
        }

        io.write_str(HELP_SUMMARY)?;
        Ok(Outcome::Success)
    }

    /// `mkdir <dir>`: create a directory.
    fn cmd_mkdir<IO: CharIo>(
        &mut self,
        io: &mut IO,
        tokens: &[String],
    ) -> Result<Outcome, IO::Error> {
        let Some(target) = tokens.get(1) else {
            return Self::report(io, &ShellError::Usage { usage: "mkdir <dir>" });
        };
        let target = Path::new(target);

        if self.platform.is_directory(target) {
            return Self::report(io, &ShellError::AlreadyExists(target.to_path_buf()));
        }

        match self.platform.create_dir(target) {
            Ok(()) => {
                io.write_str(&format!("created directory: {}\r\n", target.display()))?;
                Ok(Outcome::Success)
            }
            Err(source) => Self::report(io, &ShellError::Os {
                action: "create directory",
                path: target.to_path_buf(),
                source,
            }),
        }
    }

    /// `rm <file>`: delete a regular file.
    fn cmd_rm<IO: CharIo>(
        &mut self,
        io: &mut IO,
        tokens: &[String],
    ) -> Result<Outcome, IO::Error> {
        let Some(target) = tokens.get(1) else {
            return Self::report(io, &ShellError::Usage { usage: "rm <file>" });
        };
        let target = Path::new(target);

        if !self.platform.is_file(target) {
            return Self::report(io, &ShellError::FileNotFound(target.to_path_buf()));
        }

        match self.platform.delete_file(target) {
            Ok(()) => {
                io.write_str(&format!("deleted: {}\r\n", target.display()))?;
                Ok(Outcome::Success)
            }
            Err(source) => Self::report(io, &ShellError::Os {
                action: "delete",
                path: target.to_path_buf(),
                source,
            }),
        }
    }

    /// Spawn `argv` as an external process and block until it terminates.
    ///
    /// A non-zero exit code is informational output; only a failure to
    /// create the process is an error.
    fn run_external<IO: CharIo>(
        &mut self,
        io: &mut IO,
        argv: &[String],
    ) -> Result<Outcome, IO::Error> {
        let command_line = join_quoted(argv);

        match self.platform.spawn_wait(argv) {
            Ok(0) => Ok(Outcome::ExternalExit(0)),
            Ok(code) => {
                io.write_str(&format!("'{}' exited with code {}\r\n", command_line, code))?;
                Ok(Outcome::ExternalExit(code))
            }
            Err(source) => Self::report(io, &ShellError::Spawn {
                command: command_line,
                source,
            }),
        }
    }
}

impl<P, C> core::fmt::Debug for Dispatcher<P, C>
where
    P: Platform,
    C: ShellConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
