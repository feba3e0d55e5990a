//! Shell orchestration and the interactive input loop.
//!
//! The `Shell` struct composes the decoder, completion engine, tokenizer,
//! and dispatcher into one synchronous loop: render prompt, read keys into
//! the line buffer, tokenize the accepted line, dispatch, repeat.

use crate::config::ShellConfig;
use crate::io::CharIo;
use crate::platform::Platform;

// Sub-modules
pub mod completion;
pub mod decoder;
pub mod dispatch;
pub mod prompt;
pub mod tokenizer;

// Re-export key types
pub use decoder::{InputDecoder, InputEvent};
pub use dispatch::{CommandKind, Dispatcher, Outcome};
pub use prompt::PromptState;
pub use tokenizer::tokenize;

/// Loop control after one processed character.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading keys
    Continue,

    /// `exit`/`ez` observed: the loop is done
    Terminated,
}

/// Shell orchestration struct.
///
/// Single-threaded and synchronous: the only blocking points are the
/// `get_char` read and the wait on a spawned external process.
///
/// Generic over:
/// - `IO`: CharIo implementation (terminal endpoint)
/// - `P`: Platform implementation (OS capabilities)
/// - `C`: ShellConfig implementation
pub struct Shell<IO, P, C>
where
    IO: CharIo,
    P: Platform,
    C: ShellConfig,
{
    /// Terminal endpoint
    io: IO,

    /// Command dispatcher, owns the platform capabilities
    dispatcher: Dispatcher<P, C>,

    /// Prompt state, mutated only by a successful `cd`
    prompt: PromptState,

    /// In-progress input line
    // TODO: Use C::MAX_INPUT when const generics stabilize
    input_buffer: heapless::String<128>,

    /// Input decoder (escape sequence state machine)
    decoder: InputDecoder,
}

impl<IO, P, C> Shell<IO, P, C>
where
    IO: CharIo,
    P: Platform,
    C: ShellConfig,
{
    /// Create a new shell around a terminal endpoint and a platform.
    ///
    /// Reads the current working directory to seed the prompt.
    pub fn new(io: IO, platform: P) -> std::io::Result<Self> {
        let cwd = platform.current_dir()?;
        Ok(Self {
            io,
            dispatcher: Dispatcher::new(platform),
            prompt: PromptState::new(cwd, C::PROMPT_DELIMITER),
            input_buffer: heapless::String::new(),
            decoder: InputDecoder::new(),
        })
    }

    /// Clear the screen, print the welcome banner, render the first prompt.
    pub fn activate(&mut self) -> Result<(), IO::Error> {
        if let Err(e) = self.dispatcher.platform_mut().clear_screen() {
            self.io
                .write_str(&format!("Warning: could not clear screen: {}\r\n", e))?;
        }
        self.io.write_str(C::MSG_WELCOME)?;
        self.write_prompt()
    }

    /// Run the interactive loop until `exit`/`ez` or end of input.
    ///
    /// Call [`Shell::activate`] first to render the banner and prompt.
    pub fn run(&mut self) -> Result<(), IO::Error> {
        loop {
            match self.io.get_char()? {
                None => return Ok(()), // end of input
                Some(c) => {
                    if self.process_char(c)? == Step::Terminated {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Process a single keystroke.
    ///
    /// Main entry point for character-by-character processing; `run()` is a
    /// thin loop over this. Returns `Step::Terminated` once an exit
    /// sentinel has been dispatched.
    pub fn process_char(&mut self, c: char) -> Result<Step, IO::Error> {
        match self.decoder.decode_char(c) {
            InputEvent::None => Ok(Step::Continue),

            InputEvent::Char(ch) => {
                match self.input_buffer.push(ch) {
                    Ok(()) => self.io.put_char(ch)?,
                    // Buffer full - beep and drop the character
                    Err(_) => self.io.put_char('\x07')?,
                }
                Ok(Step::Continue)
            }

            InputEvent::Backspace => {
                if !self.input_buffer.is_empty() {
                    self.input_buffer.pop();
                    // Visual erase of exactly one character
                    self.io.write_str("\x08 \x08")?;
                }
                Ok(Step::Continue)
            }

            InputEvent::Cancel => {
                self.cancel_line()?;
                Ok(Step::Continue)
            }

            InputEvent::Tab => {
                self.handle_tab()?;
                Ok(Step::Continue)
            }

            InputEvent::Enter => self.handle_enter(),
        }
    }

    /// Erase every echoed character and clear the buffer.
    fn cancel_line(&mut self) -> Result<(), IO::Error> {
        for _ in 0..self.input_buffer.chars().count() {
            self.io.write_str("\x08 \x08")?;
        }
        self.input_buffer.clear();
        Ok(())
    }

    /// Tab: render completion suggestions, then re-echo prompt and buffer.
    ///
    /// Advisory only - the buffer is never modified.
    fn handle_tab(&mut self) -> Result<(), IO::Error> {
        let matches = completion::complete(self.input_buffer.as_str());
        if matches.is_empty() {
            return self.io.put_char('\x07');
        }

        self.io.write_str("\r\n")?;
        for (i, name) in matches.iter().enumerate() {
            if i > 0 {
                self.io.write_str("  ")?;
            }
            self.io.write_str(name)?;
        }
        self.io.write_str("\r\n")?;
        self.write_prompt()?;
        self.io.write_str(self.input_buffer.as_str())
    }

    /// Enter: accept the line, tokenize, dispatch, re-render the prompt.
    fn handle_enter(&mut self) -> Result<Step, IO::Error> {
        let line = self.input_buffer.as_str().to_string();
        self.input_buffer.clear();
        self.io.write_str("\r\n")?;

        let tokens = tokenize(&line);
        match self
            .dispatcher
            .dispatch(&mut self.io, &tokens, &mut self.prompt)?
        {
            Outcome::ExitRequested => Ok(Step::Terminated),
            _ => {
                self.write_prompt()?;
                Ok(Step::Continue)
            }
        }
    }

    fn write_prompt(&mut self) -> Result<(), IO::Error> {
        let prompt = self.prompt.render();
        self.io.write_str(&prompt)
    }

    /// Current prompt state.
    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    /// Reference to the terminal endpoint.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Mutable reference to the terminal endpoint.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Mutable access to the platform, e.g. for test setup.
    pub fn platform_mut(&mut self) -> &mut P {
        self.dispatcher.platform_mut()
    }

    /// Current line buffer contents (for tests and diagnostics).
    pub fn buffer(&self) -> &str {
        self.input_buffer.as_str()
    }
}

impl<IO, P, C> core::fmt::Debug for Shell<IO, P, C>
where
    IO: CharIo,
    P: Platform,
    C: ShellConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("prompt", &self.prompt)
            .field("input_buffer", &self.input_buffer.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultConfig;
    use crate::platform::OsPlatform;

    // Mock I/O that captures output
    struct MockIo {
        output: String,
    }

    impl MockIo {
        fn new() -> Self {
            Self {
                output: String::new(),
            }
        }
    }

    impl CharIo for MockIo {
        type Error = ();
        fn get_char(&mut self) -> Result<Option<char>, ()> {
            Ok(None)
        }
        fn put_char(&mut self, c: char) -> Result<(), ()> {
            self.output.push(c);
            Ok(())
        }
        fn write_str(&mut self, s: &str) -> Result<(), ()> {
            self.output.push_str(s);
            Ok(())
        }
    }

    fn test_shell() -> Shell<MockIo, OsPlatform, DefaultConfig> {
        Shell::new(MockIo::new(), OsPlatform::new()).unwrap()
    }

    fn type_input(shell: &mut Shell<MockIo, OsPlatform, DefaultConfig>, input: &str) {
        for c in input.chars() {
            shell.process_char(c).unwrap();
        }
    }

    #[test]
    fn test_typing_echoes_and_buffers() {
        let mut shell = test_shell();
        type_input(&mut shell, "ld x");
        assert_eq!(shell.buffer(), "ld x");
        assert_eq!(shell.io().output, "ld x");
    }

    #[test]
    fn test_backspace_erases_one_character() {
        let mut shell = test_shell();
        type_input(&mut shell, "cat");
        shell.process_char('\x7f').unwrap();
        assert_eq!(shell.buffer(), "ca");
        assert!(shell.io().output.ends_with("\x08 \x08"));
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_noop() {
        let mut shell = test_shell();
        shell.process_char('\x08').unwrap();
        assert_eq!(shell.buffer(), "");
        assert_eq!(shell.io().output, "");
    }

    #[test]
    fn test_buffer_full_beeps_and_drops() {
        let mut shell = test_shell();
        for _ in 0..DefaultConfig::MAX_INPUT {
            shell.process_char('a').unwrap();
        }
        shell.io_mut().output.clear();

        shell.process_char('b').unwrap();
        assert_eq!(shell.buffer().len(), DefaultConfig::MAX_INPUT);
        assert_eq!(shell.io().output, "\x07");
    }

    #[test]
    fn test_cancel_erases_everything() {
        let mut shell = test_shell();
        type_input(&mut shell, "mkd");
        shell.process_char('\x1b').unwrap();
        shell.process_char('\x1b').unwrap();
        assert_eq!(shell.buffer(), "");
        assert!(shell.io().output.ends_with("\x08 \x08\x08 \x08\x08 \x08"));
    }

    #[test]
    #[cfg(feature = "completion")]
    fn test_tab_shows_suggestions_without_touching_buffer() {
        let mut shell = test_shell();
        type_input(&mut shell, "c");
        shell.io_mut().output.clear();

        shell.process_char('\t').unwrap();
        assert_eq!(shell.buffer(), "c");

        let output = &shell.io().output;
        assert!(output.contains("cd"));
        assert!(output.contains("cls"));
        assert!(output.contains("cat"));
        // Prompt continuation re-echoes the buffer
        assert!(output.ends_with("c"));
    }

    #[test]
    fn test_empty_enter_is_noop_and_reprompts() {
        let mut shell = test_shell();
        let step = shell.process_char('\r').unwrap();
        assert_eq!(step, Step::Continue);
        assert!(!shell.io().output.contains("Error"));
        assert!(shell.io().output.contains(DefaultConfig::PROMPT_DELIMITER));
    }

    #[test]
    fn test_exit_sentinel_terminates() {
        let mut shell = test_shell();
        type_input(&mut shell, "exit");
        let step = shell.process_char('\r').unwrap();
        assert_eq!(step, Step::Terminated);
        assert!(shell.io().output.contains(DefaultConfig::MSG_FAREWELL.trim()));
    }

    #[test]
    fn test_ez_sentinel_terminates() {
        let mut shell = test_shell();
        type_input(&mut shell, "ez");
        assert_eq!(shell.process_char('\n').unwrap(), Step::Terminated);
    }
}
