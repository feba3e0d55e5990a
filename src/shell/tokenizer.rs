//! Input line tokenization and command-line joining.
//!
//! `tokenize` splits a finished line on whitespace runs. There is no quoting
//! or escaping on input: a token containing embedded whitespace cannot be
//! typed. That is a deliberate expressiveness limit, not a parsing bug.
//!
//! `join_quoted` is the inverse used when a token list becomes an external
//! command line again (display and error messages): any token that itself
//! contains whitespace is wrapped in double quotes. Such tokens only arise
//! from synthesized commands, e.g. a `util` script path with spaces.

/// Split a raw input line into whitespace-separated tokens.
///
/// Leading, trailing, and repeated whitespace produce no empty tokens; an
/// empty or all-whitespace line yields an empty vector.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Re-join tokens into a single command line for display.
///
/// Tokens are separated by single spaces; a token containing whitespace is
/// wrapped in double quotes.
pub fn join_quoted(tokens: &[String]) -> String {
    let mut line = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        if token.chars().any(char::is_whitespace) {
            line.push('"');
            line.push_str(token);
            line.push('"');
        } else {
            line.push_str(token);
        }
    }
    line
}
