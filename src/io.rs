//! Character I/O abstraction for terminal-agnostic input/output.
//!
//! The `CharIo` trait provides character-level I/O that can be implemented
//! for any terminal-like endpoint (raw-mode stdio, a pty, a test capture
//! buffer). Reading blocks until a keystroke is available; it is the single
//! point of suspension in the shell loop besides waiting on a spawned
//! process.

/// Terminal-agnostic character I/O trait.
pub trait CharIo {
    /// Endpoint-specific error type
    type Error;

    /// Blocking character read.
    ///
    /// Returns:
    /// - `Ok(Some(char))` once a keystroke is available
    /// - `Ok(None)` on end of input (the shell loop terminates)
    /// - `Err(Self::Error)` on I/O error
    fn get_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Write a character to the output.
    fn put_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Write a string to the output.
    ///
    /// Default implementation uses `put_char()` repeatedly.
    /// Override for more efficient bulk writes if needed.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }
}
