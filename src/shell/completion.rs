//! Tab completion over the built-in command vocabulary.
//!
//! Prefix matching against a fixed vocabulary, returned in declaration
//! order. Uses the stub function pattern - the module always exists, the
//! function returns no matches when the feature is disabled.

#![cfg_attr(not(feature = "completion"), allow(unused_variables))]

/// Built-in command vocabulary, in declaration order.
///
/// Covers the dispatcher's built-ins plus the common pass-through external
/// names and the exit sentinels. Process-wide static configuration, never
/// mutated at runtime.
pub const VOCABULARY: &[&str] = &[
    "cd", "cls", "ld", "cat", "help", "mkdir", "rm", "util", "ping", "echo", "exit", "ez",
];

/// Suggest completions for a partial command name.
///
/// Returns every vocabulary entry whose prefix equals `partial` exactly
/// (case-sensitive), preserving declaration order. An empty `partial`
/// matches the entire vocabulary.
///
/// Advisory only: no program state is affected.
#[cfg(feature = "completion")]
pub fn complete(partial: &str) -> Vec<&'static str> {
    VOCABULARY
        .iter()
        .copied()
        .filter(|name| name.starts_with(partial))
        .collect()
}

/// Stub implementation when the completion feature is disabled.
///
/// Returns no matches (graceful degradation).
#[cfg(not(feature = "completion"))]
pub fn complete(partial: &str) -> Vec<&'static str> {
    Vec::new()
}
