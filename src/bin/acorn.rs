//! The `acorn` interactive shell binary.
//!
//! Wires raw-mode stdin/stdout and the OS-backed platform into the shell
//! loop. All behavior lives in the library; this is only the terminal
//! harness.

use acorn_shell::config::DefaultConfig;
use acorn_shell::io::CharIo;
use acorn_shell::platform::OsPlatform;
use acorn_shell::shell::Shell;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Read, Write};

// =============================================================================
// Terminal Raw Mode Guard
// =============================================================================

/// RAII guard that enables raw terminal mode on creation and restores on drop.
///
/// This ensures the terminal is always restored, even on panic or error.
/// Raw mode provides:
/// - No local echo (the shell controls all echoing)
/// - No line buffering (process characters immediately)
/// - No special key processing by the terminal (Tab, ESC passed through)
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Always try to restore terminal mode
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// I/O Implementation
// =============================================================================

/// Standard I/O implementation using stdin/stdout.
///
/// Blocking byte-at-a-time reads; raw mode delivers each keystroke as soon
/// as it is typed.
struct StdioCharIo {
    stdin: io::Stdin,
}

impl StdioCharIo {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl CharIo for StdioCharIo {
    type Error = io::Error;

    fn get_char(&mut self) -> Result<Option<char>, Self::Error> {
        let mut buf = [0u8; 1];
        let mut handle = self.stdin.lock();

        loop {
            match handle.read(&mut buf) {
                Ok(0) => return Ok(None), // EOF
                // Byte-wise conversion is enough for the control keys and
                // the ASCII printable range the line reader accepts
                Ok(_) => return Ok(Some(buf[0] as char)),
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", c)?;
        stdout.flush()
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(s.as_bytes())?;
        stdout.flush()
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> io::Result<()> {
    let _guard = RawModeGuard::new()?;

    let io = StdioCharIo::new();
    let platform = OsPlatform::new();

    let mut shell: Shell<StdioCharIo, OsPlatform, DefaultConfig> = Shell::new(io, platform)?;
    shell.activate()?;
    shell.run()
}
