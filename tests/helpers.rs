//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

use acorn_shell::config::DefaultConfig;
use acorn_shell::shell::Shell;

// Re-exported so tests pass the exact types these helpers are built over
pub use fixtures::{MockIo, MockPlatform};

pub type TestShell = Shell<MockIo, MockPlatform, DefaultConfig>;

// ============================================================================
// Shell Creation Helpers
// ============================================================================

/// Create a shell over the scripted platform, ready for testing.
pub fn create_test_shell() -> TestShell {
    create_shell_with(MockPlatform::new())
}

/// Create a shell over a pre-configured platform.
pub fn create_shell_with(platform: MockPlatform) -> TestShell {
    let io = MockIo::new();
    let mut shell = Shell::new(io, platform).unwrap();
    shell.activate().unwrap();
    shell.io_mut().clear_output();
    shell
}

// ============================================================================
// Command Execution Helpers
// ============================================================================

/// Execute a command line and return the output it produced.
pub fn execute_command(shell: &mut TestShell, cmd: &str) -> String {
    shell.io_mut().clear_output();

    for c in cmd.chars() {
        shell.process_char(c).unwrap();
    }

    if !cmd.ends_with('\n') {
        shell.process_char('\n').unwrap();
    }

    shell.io_mut().output()
}

/// Type input without executing (no trailing newline).
pub fn type_input(shell: &mut TestShell, input: &str) {
    for c in input.chars() {
        shell.process_char(c).unwrap();
    }
}

pub fn press_enter(shell: &mut TestShell) {
    shell.process_char('\r').unwrap();
}

pub fn press_backspace(shell: &mut TestShell) {
    shell.process_char('\x7f').unwrap();
}

pub fn press_backspace_n(shell: &mut TestShell, n: usize) {
    for _ in 0..n {
        press_backspace(shell);
    }
}

pub fn press_tab(shell: &mut TestShell) {
    shell.process_char('\t').unwrap();
}

/// Double ESC: cancel the in-progress line.
pub fn press_cancel(shell: &mut TestShell) {
    shell.process_char('\x1b').unwrap();
    shell.process_char('\x1b').unwrap();
}

// ============================================================================
// Assertion Helpers
// ============================================================================

pub fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "expected output to contain {:?}, got {:?}",
        needle,
        output
    );
}

pub fn assert_contains_none(output: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            !output.contains(needle),
            "expected output to not contain {:?}, got {:?}",
            needle,
            output
        );
    }
}
