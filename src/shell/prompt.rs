//! Prompt state: the display segments rendered before each input read.
//!
//! Three ordered segments - a leading-newline marker, the absolute working
//! directory, and a trailing delimiter - concatenated by `render()`. Only
//! the `cd` handler mutates the directory segment, and only after the OS
//! has confirmed the change.

use std::path::{Path, PathBuf};

/// Leading marker separating the prompt from previous output.
const MARKER: &str = "\r\n";

/// Prompt state threaded from the shell loop into the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    directory: PathBuf,
    delimiter: &'static str,
}

impl PromptState {
    /// Create prompt state for the given working directory.
    pub fn new(directory: PathBuf, delimiter: &'static str) -> Self {
        Self {
            directory,
            delimiter,
        }
    }

    /// Concatenate the segments into the rendered prompt.
    pub fn render(&self) -> String {
        let mut prompt = String::new();
        prompt.push_str(MARKER);
        prompt.push_str(&self.directory.display().to_string());
        prompt.push_str(self.delimiter);
        prompt
    }

    /// Replace the directory segment. Called by the `cd` handler only
    /// after the working-directory change succeeded.
    pub fn set_directory(&mut self, directory: PathBuf) {
        self.directory = directory;
    }

    /// Directory currently shown in the prompt.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
