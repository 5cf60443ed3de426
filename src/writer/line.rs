//! Composition and parsing of a single persisted log line.
//!
//! Layout: `[<timestamp> : ]<severity> : <message>`, newline appended by the writer.

use crate::level::Level;

/// Separator between the timestamp, severity and message fields.
pub const SEPARATOR: &str = " : ";

/// Builds one line without the trailing newline.
#[must_use]
pub fn compose(timestamp: Option<&str>, level: Level, message: &str) -> String {
    let mut line = String::with_capacity(
        timestamp.map_or(0, |ts| ts.len() + SEPARATOR.len())
            + level.as_str().len()
            + SEPARATOR.len()
            + message.len(),
    );
    if let Some(ts) = timestamp {
        line.push_str(ts);
        line.push_str(SEPARATOR);
    }
    line.push_str(level.as_str());
    line.push_str(SEPARATOR);
    line.push_str(message);
    line
}

/// Fields recovered from a persisted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub timestamp: Option<&'a str>,
    pub level: Level,
    pub message: &'a str,
}

/// Splits a line back into its fields.
///
/// `timestamped` must match the writer's `save_timestamp` setting: the
/// timestamp and severity are taken from the first two separators and the
/// rest is the message, even if the message contains separators itself.
#[must_use]
pub fn parse(line: &str, timestamped: bool) -> Option<ParsedLine<'_>> {
    let line = line.strip_suffix('\n').unwrap_or(line);

    let (timestamp, rest) = if timestamped {
        let (ts, rest) = line.split_once(SEPARATOR)?;
        (Some(ts), rest)
    } else {
        (None, line)
    };

    let (level, message) = rest.split_once(SEPARATOR)?;
    let level = level.parse().ok()?;

    Some(ParsedLine {
        timestamp,
        level,
        message,
    })
}
