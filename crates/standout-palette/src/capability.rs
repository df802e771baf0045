//! Capability table and sequence composition.
//!
//! A [`Capabilities`] table maps terminfo capability names (`bold`, `smul`,
//! `setaf`, ...) to raw sequence templates. In a full terminal stack the
//! table comes from a terminfo lookup; [`Capabilities::xterm`] provides an
//! in-memory stand-in with xterm-256color sequences.
//!
//! Templates containing `%` are parameterized. The color templates `setaf`
//! and `setab` take a single palette index through a `%d` placeholder;
//! other parameterized capabilities (`csr`, `cup`) are never usable as
//! plain formatters.

use std::collections::HashMap;

use crate::resolve::Resolved;

/// Capability name of the attribute reset sequence.
pub const NORMAL: &str = "sgr0";

/// Which half of a cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// Capability holding the indexed color template for this layer.
    pub fn capname(self) -> &'static str {
        match self {
            Layer::Foreground => "setaf",
            Layer::Background => "setab",
        }
    }

    fn sgr_code(self) -> u8 {
        match self {
            Layer::Foreground => 38,
            Layer::Background => 48,
        }
    }
}

/// Capability name → raw sequence template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    sequences: HashMap<String, String>,
}

impl Capabilities {
    /// Creates an empty table. Every formatter resolves to `Null`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequences of a typical xterm-256color terminal.
    pub fn xterm() -> Self {
        [
            ("bold", "\x1b[1m"),
            ("dim", "\x1b[2m"),
            ("sitm", "\x1b[3m"),
            ("ritm", "\x1b[23m"),
            ("smul", "\x1b[4m"),
            ("rmul", "\x1b[24m"),
            ("blink", "\x1b[5m"),
            ("rev", "\x1b[7m"),
            ("smso", "\x1b[7m"),
            ("rmso", "\x1b[27m"),
            (NORMAL, "\x1b[0m"),
            ("setaf", "\x1b[38;5;%dm"),
            ("setab", "\x1b[48;5;%dm"),
            ("el", "\x1b[K"),
            ("home", "\x1b[H"),
            ("clear", "\x1b[H\x1b[2J"),
            ("civis", "\x1b[?25l"),
            ("cnorm", "\x1b[?12l\x1b[?25h"),
            ("csr", "\x1b[%d;%dr"),
            ("cup", "\x1b[%d;%dH"),
        ]
        .into_iter()
        .fold(Self::new(), |caps, (name, seq)| caps.with(name, seq))
    }

    /// Adds or replaces a capability, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, sequence: impl Into<String>) -> Self {
        self.insert(name, sequence);
        self
    }

    /// Removes a capability, returning `self` for chaining.
    pub fn without(mut self, name: &str) -> Self {
        self.sequences.remove(name);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, sequence: impl Into<String>) {
        self.sequences.insert(name.into(), sequence.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sequences.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sequences.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Returns a capability only if it takes no parameters.
    pub fn plain(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|seq| !is_parameterized(seq))
    }

    /// The reset sequence, or `""` if the terminal has none.
    pub fn normal(&self) -> &str {
        self.plain(NORMAL).unwrap_or("")
    }

    /// Turns a resolved color into the sequence that selects it.
    ///
    /// Indexed colors go through the layer's template and yield `None` when
    /// the template is missing. True color always uses the 24-bit SGR form.
    pub fn compose(&self, layer: Layer, color: Resolved) -> Option<String> {
        match color {
            Resolved::None => None,
            Resolved::Index(index) => self
                .get(layer.capname())
                .map(|template| template.replacen("%d", &index.to_string(), 1)),
            Resolved::Rgb(rgb) => Some(format!(
                "\x1b[{};2;{};{};{}m",
                layer.sgr_code(),
                rgb.0,
                rgb.1,
                rgb.2
            )),
        }
    }
}

/// Returns `true` if a template expects parameters.
pub fn is_parameterized(template: &str) -> bool {
    template.contains('%')
}
