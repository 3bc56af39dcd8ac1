//! POSIX-shell quoting for displaying commands.

/// Characters that never need quoting
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '@' | '=' | '+' | ',' | '%')
}

/// Quotes `arg` so a POSIX shell reads it back as a single word
#[must_use]
pub fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(is_safe) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// Joins tokens into a single shell-safe line
#[must_use]
pub fn join_for_display<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| quote_arg(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
