//! Configuration traits and implementations for buffer sizing and fixed text.
//!
//! The `ShellConfig` trait allows compile-time configuration of buffer sizes
//! and the shell's fixed strings without runtime overhead.

/// Shell configuration trait defining capacity limits and fixed text.
///
/// All values are const (zero runtime cost).
pub trait ShellConfig {
    /// Maximum input line length in characters (default: 128)
    const MAX_INPUT: usize;

    /// Banner printed once when the shell starts
    const MSG_WELCOME: &'static str;

    /// Message printed when the shell terminates via `exit`/`ez`
    const MSG_FAREWELL: &'static str;

    /// Interpreter used to run `util` scripts
    const SCRIPT_INTERPRETER: &'static str;

    /// File extension of `util` scripts (without the dot)
    const SCRIPT_EXTENSION: &'static str;

    /// Name of the subdirectory holding `util` scripts, relative to the
    /// shell's install directory
    const SCRIPT_DIR: &'static str;

    /// Name of the optional plain-text help resource, relative to the
    /// shell's install directory
    const HELP_RESOURCE: &'static str;

    /// Prompt delimiter rendered after the working directory
    const PROMPT_DELIMITER: &'static str;
}

/// Default configuration.
///
/// - MAX_INPUT: 128 characters
/// - scripts run as `python <install_dir>/scripts/<name>.py`
/// - help resource: `<install_dir>/help.txt`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ShellConfig for DefaultConfig {
    const MAX_INPUT: usize = 128;
    const MSG_WELCOME: &'static str = "Type 'help' for available commands\r\n";
    const MSG_FAREWELL: &'static str = "Goodbye!\r\n";
    const SCRIPT_INTERPRETER: &'static str = "python";
    const SCRIPT_EXTENSION: &'static str = "py";
    const SCRIPT_DIR: &'static str = "scripts";
    const HELP_RESOURCE: &'static str = "help.txt";
    const PROMPT_DELIMITER: &'static str = "> ";
}
