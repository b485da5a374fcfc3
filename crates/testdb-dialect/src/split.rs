//! Shared batch-splitting helpers.
//!
//! The per-engine separator rules live in the dialect implementations;
//! this module holds the pieces they share: the database-name token, the
//! executable-batch filter, and the two line-oriented splitting scans.

use crate::error::DialectError;

/// Scripting-variable token replaced with the target database name before
/// a script is split.
pub const DATABASE_NAME_TOKEN: &str = "$(DatabaseName)";

/// Reject empty input before splitting.
pub(crate) fn ensure_not_empty(script: &str) -> Result<(), DialectError> {
    if script.trim().is_empty() {
        return Err(DialectError::ScriptParse("setup script is empty".into()));
    }
    Ok(())
}

/// Substitute every occurrence of [`DATABASE_NAME_TOKEN`].
pub(crate) fn substitute_database_name(script: &str, database: &str) -> String {
    script.replace(DATABASE_NAME_TOKEN, database)
}

/// Whether a batch contains anything to execute, ignoring blank lines and
/// `--` line comments.
pub(crate) fn is_executable(batch: &str) -> bool {
    batch.lines().any(|line| {
        let code = line.split_once("--").map_or(line, |(before, _)| before);
        !code.trim().is_empty()
    })
}

/// Whether a line is a `GO` batch separator.
///
/// sqlcmd accepts the keyword case-insensitively, on a line of its own,
/// with an optional trailing semicolon.
pub(crate) fn is_go_separator(line: &str) -> bool {
    use once_cell::sync::Lazy;
    use regex::Regex;

    #[allow(clippy::unwrap_used)]
    static GO_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*GO\s*;?\s*$").unwrap());

    GO_LINE.is_match(line)
}

/// Split on lines consisting solely of the `GO` separator.
pub(crate) fn split_on_go(script: &str) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current = String::new();

    for line in script.lines() {
        if is_go_separator(line) {
            push_batch(&mut batches, &mut current);
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    push_batch(&mut batches, &mut current);

    tracing::debug!(batches = batches.len(), "split script on GO separators");
    batches
}

/// Split into statements terminated by a semicolon at end of line.
///
/// A semicolon inside a string literal at the very end of a line is
/// indistinguishable from a terminator here; setup scripts are expected
/// to avoid that shape.
pub(crate) fn split_on_terminator(script: &str) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current = String::new();

    for line in script.lines() {
        current.push_str(line);
        current.push('\n');

        let code = line.split_once("--").map_or(line, |(before, _)| before);
        if code.trim_end().ends_with(';') {
            push_batch(&mut batches, &mut current);
        }
    }
    push_batch(&mut batches, &mut current);

    tracing::debug!(batches = batches.len(), "split script on statement terminators");
    batches
}

fn push_batch(batches: &mut Vec<String>, current: &mut String) {
    if is_executable(current) {
        batches.push(current.trim().to_string());
    }
    current.clear();
}
