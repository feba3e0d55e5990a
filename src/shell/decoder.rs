//! Input decoder for terminal character sequences.
//!
//! A pure state machine turning raw keystrokes into logical input events.
//! It doesn't manage buffers or I/O.
//!
//! Escape handling: a double ESC is the cancel key (clear the line);
//! `ESC [` introduces a CSI sequence whose final byte is swallowed, so
//! arrow keys and friends are silently discarded rather than leaking
//! bytes into the buffer.

/// Decoder state for escape sequence handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputState {
    /// Normal input mode
    Normal,

    /// Saw first ESC character
    EscapeStart,

    /// Saw ESC [ (start of a CSI sequence)
    EscapeSequence,
}

/// Logical input event from the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// No event (accumulating sequence, or discarded key)
    None,

    /// Printable character typed
    Char(char),

    /// Erase key (ASCII BS or DEL)
    Backspace,

    /// Accept key (line feed or carriage return)
    Enter,

    /// Completion-trigger key
    Tab,

    /// Cancel key (double ESC): clear the in-progress line
    Cancel,
}

/// Terminal input decoder with escape sequence handling.
#[derive(Debug)]
pub struct InputDecoder {
    state: InputState,
}

impl InputDecoder {
    /// Create new decoder in Normal state.
    pub fn new() -> Self {
        Self {
            state: InputState::Normal,
        }
    }

    /// Decode a single character into an input event.
    ///
    /// Updates the internal state machine and returns the logical input
    /// action, if the character completed one.
    pub fn decode_char(&mut self, c: char) -> InputEvent {
        match self.state {
            InputState::Normal => self.decode_normal(c),
            InputState::EscapeStart => self.decode_escape_start(c),
            InputState::EscapeSequence => self.decode_escape_sequence(c),
        }
    }

    fn decode_normal(&mut self, c: char) -> InputEvent {
        match c {
            '\x1b' => {
                self.state = InputState::EscapeStart;
                InputEvent::None
            }

            '\n' | '\r' => InputEvent::Enter,

            '\t' => InputEvent::Tab,

            // ASCII BS (0x08) or DEL (0x7F)
            '\x08' | '\x7f' => InputEvent::Backspace,

            // Remaining control characters are discarded, never echoed
            c if c.is_control() => InputEvent::None,

            _ => InputEvent::Char(c),
        }
    }

    fn decode_escape_start(&mut self, c: char) -> InputEvent {
        match c {
            // Second ESC = cancel
            '\x1b' => {
                self.state = InputState::Normal;
                InputEvent::Cancel
            }

            '[' => {
                self.state = InputState::EscapeSequence;
                InputEvent::None
            }

            // ESC followed by a plain character: not a sequence,
            // treat the character as itself
            _ => {
                self.state = InputState::Normal;
                self.decode_normal(c)
            }
        }
    }

    fn decode_escape_sequence(&mut self, _c: char) -> InputEvent {
        // The final byte of the sequence ends it; none are mapped to
        // events, so arrow keys and similar are silently discarded.
        self.state = InputState::Normal;
        InputEvent::None
    }

    /// Reset decoder state to Normal.
    pub fn reset(&mut self) {
        self.state = InputState::Normal;
    }

    /// Get current decoder state (for testing/debugging).
    #[cfg(test)]
    pub fn state(&self) -> InputState {
        self.state
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}
