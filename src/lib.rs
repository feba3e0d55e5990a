//! # acorn-shell
//!
//! A small interactive command shell: raw keystroke input with in-place
//! line editing and tab completion, a fixed set of built-in file commands,
//! and pass-through execution of anything else as an external process.
//!
//! **Key pieces:**
//! - **Line reader** - character-at-a-time input with backspace, cancel,
//!   and completion handling
//! - **Dispatcher** - first-match-wins routing of the first token to a
//!   built-in handler or the external-process path
//! - **Flexible I/O** - terminal-agnostic character I/O trait
//! - **Platform seam** - OS capabilities (spawn, filesystem) behind a
//!   trait, fully mockable in tests
//!
//! ## Optional Features
//!
//! - `completion` - Tab completion for command names (default)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod io;
pub mod platform;
pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::CharIo;

// Configuration
pub use config::{DefaultConfig, ShellConfig};

// Error types
pub use error::ShellError;

// Platform capabilities
pub use platform::{EntryInfo, Listing, OsPlatform, Platform};

// Shell types
pub use shell::{CommandKind, Dispatcher, InputDecoder, InputEvent, Outcome, PromptState, Shell, Step};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
