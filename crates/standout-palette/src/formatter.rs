//! Formatter wrappers and compound name parsing.
//!
//! A [`Formatter`] is what a formatter name such as `"bold_on_seagreen"`
//! resolves to. Both variants wrap text; only [`Formatter::Active`] adds
//! anything to it.
//!
//! # Compound names
//!
//! Names are split on `_`. The prefixes `on`, `bright` and `on_bright`
//! stay attached to the segment that follows, so
//! `"underline_on_bright_red"` splits into `["underline", "on_bright_red"]`.
//! Each segment must then be a style attribute, a foreground color name,
//! or an `on_` background color name.

use std::fmt;

use crate::names;

/// Style attributes usable in compound names, with their capability names.
pub const COMPOUNDABLES: [(&str, &str); 7] = [
    ("bold", "bold"),
    ("dim", "dim"),
    ("italic", "sitm"),
    ("underline", "smul"),
    ("blink", "blink"),
    ("reverse", "rev"),
    ("standout", "smso"),
];

/// A resolved formatter.
///
/// # Example
///
/// ```rust
/// use standout_palette::Formatter;
///
/// let bold = Formatter::active("\x1b[1m", "\x1b[0m");
/// assert_eq!(bold.wrap("smoo"), "\x1b[1msmoo\x1b[0m");
/// assert_eq!(Formatter::Null.wrap("smoo"), "smoo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formatter {
    /// Emits `start` before and `stop` after the wrapped text.
    Active { start: String, stop: String },
    /// Returns text unchanged.
    Null,
}

impl Formatter {
    /// Creates an active formatter. An empty `start` yields [`Formatter::Null`].
    pub fn active(start: impl Into<String>, stop: impl Into<String>) -> Self {
        let start = start.into();
        if start.is_empty() {
            return Formatter::Null;
        }
        Formatter::Active {
            start,
            stop: stop.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Formatter::Active { .. })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Formatter::Null)
    }

    /// The opening sequence, `""` for [`Formatter::Null`].
    pub fn start(&self) -> &str {
        match self {
            Formatter::Active { start, .. } => start,
            Formatter::Null => "",
        }
    }

    /// The closing sequence, `""` for [`Formatter::Null`].
    pub fn stop(&self) -> &str {
        match self {
            Formatter::Active { stop, .. } => stop,
            Formatter::Null => "",
        }
    }

    /// Wraps `text` in this formatter's sequences.
    ///
    /// Any stop sequence already inside `text` is followed by this
    /// formatter's start sequence again, so an inner styled span does not
    /// end the outer style early.
    pub fn wrap(&self, text: &str) -> String {
        self.wrap_parts(&[text])
    }

    /// Wraps the concatenation of `parts`.
    pub fn wrap_parts(&self, parts: &[&str]) -> String {
        match self {
            Formatter::Null => parts.concat(),
            Formatter::Active { start, stop } if stop.is_empty() => {
                format!("{}{}", start, parts.concat())
            }
            Formatter::Active { start, stop } => {
                let refresh = format!("{}{}", stop, start);
                let body: String = parts
                    .iter()
                    .map(|part| part.replace(stop.as_str(), &refresh))
                    .collect();
                format!("{}{}{}", start, body, stop)
            }
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::Null
    }
}

/// Displays the opening sequence.
impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.start())
    }
}

/// One segment of a compound formatter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Style attribute, carrying its capability name.
    Attribute(&'static str),
    Foreground(&'a str),
    Background(&'a str),
}

const MERGEABLE_PREFIXES: [&str; 3] = ["on", "bright", "on_bright"];

/// Splits a compound name, keeping `on_`/`bright_` prefixes attached.
pub(crate) fn split_compound(name: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for part in name.split('_') {
        match segments.last_mut() {
            Some(last) if MERGEABLE_PREFIXES.contains(&last.as_str()) => {
                last.push('_');
                last.push_str(part);
            }
            _ => segments.push(part.to_string()),
        }
    }
    segments
}

/// Classifies a single segment, `None` if it is not formatting.
pub(crate) fn classify(segment: &str) -> Option<Token<'_>> {
    if let Some((_, capname)) = COMPOUNDABLES.iter().find(|(name, _)| *name == segment) {
        return Some(Token::Attribute(*capname));
    }
    if let Some(color) = segment.strip_prefix("on_") {
        return names::is_color_name(color).then_some(Token::Background(color));
    }
    names::is_color_name(segment).then_some(Token::Foreground(segment))
}

/// Parses a full name into tokens, `None` if any segment is unknown.
pub(crate) fn parse(name: &str) -> Option<Vec<Token<'_>>> {
    if name.is_empty() {
        return None;
    }
    let mut tokens = Vec::new();
    let mut rest = name;
    for segment in split_compound(name) {
        // Segments are contiguous slices of `name` joined by single '_'.
        let (current, tail) = rest.split_at(segment.len());
        tokens.push(classify(current)?);
        rest = tail.strip_prefix('_').unwrap_or(tail);
    }
    Some(tokens)
}
