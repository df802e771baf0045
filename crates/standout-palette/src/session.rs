//! Terminal sessions.
//!
//! A [`Session`] owns everything formatter resolution depends on: the color
//! depth, the distance algorithm, whether styling is enabled at all, and the
//! capability table. Resolved formatters are memoized per name; changing any
//! of that state clears the whole cache.
//!
//! Sessions are independent of each other, so differently configured
//! sessions can coexist in one process.
//!
//! # Example
//!
//! ```rust
//! use standout_palette::{PaletteError, Session};
//!
//! let mut session = Session::new();
//! session.set_color_depth(1 << 24).unwrap();
//!
//! let title = session.formatter("bold_on_seagreen");
//! assert!(title.is_active());
//! assert_eq!(title, session.attr("bold_on_seagreen"));
//!
//! assert!(matches!(
//!     session.set_color_depth(40),
//!     Err(PaletteError::InvalidDepth(40))
//! ));
//! assert_eq!(session.number_of_colors(), 1 << 24);
//! ```

use std::collections::HashMap;

use crate::capability::{Capabilities, Layer};
use crate::distance::{self, DistanceAlgorithm};
use crate::env::{EnvReader, RealEnv};
use crate::formatter::{self, Formatter, Token};
use crate::names::{self, NamedColor};
use crate::resolve::{resolve, Resolved};
use crate::{config, palette, ColorDepth, PaletteError, RgbColor};

/// Color state and formatter cache for one output device.
#[derive(Debug, Clone)]
pub struct Session {
    depth: ColorDepth,
    algorithm: DistanceAlgorithm,
    does_styling: bool,
    capabilities: Capabilities,
    cache: HashMap<String, Formatter>,
}

impl Session {
    /// A 256-color xterm session using the default distance algorithm.
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::xterm())
    }

    /// A 256-color session backed by the given capability table.
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            depth: ColorDepth::default(),
            algorithm: DistanceAlgorithm::default(),
            does_styling: true,
            capabilities,
            cache: HashMap::new(),
        }
    }

    /// Detects depth from the process environment and styling from `console`.
    pub fn detect() -> Self {
        Self::detect_with(&RealEnv, console::colors_enabled())
    }

    /// Detects depth from `env`; `styling` decides whether anything is emitted.
    pub fn detect_with(env: &dyn EnvReader, styling: bool) -> Self {
        let depth = config::detect_color_depth(env);
        log::debug!("detected color depth {}, styling {}", depth, styling);
        Self::new().with_color_depth(depth).with_styling(styling)
    }

    /// Sets the color depth, returning `self` for chaining.
    pub fn with_color_depth(mut self, depth: ColorDepth) -> Self {
        self.depth = depth;
        self.cache.clear();
        self
    }

    /// Sets the distance algorithm, returning `self` for chaining.
    pub fn with_algorithm(mut self, algorithm: DistanceAlgorithm) -> Self {
        self.algorithm = algorithm;
        self.cache.clear();
        self
    }

    /// Enables or disables styling, returning `self` for chaining.
    pub fn with_styling(mut self, does_styling: bool) -> Self {
        self.does_styling = does_styling;
        self.cache.clear();
        self
    }

    // ─── State ──────────────────────────────────────────────────────────────

    pub fn color_depth(&self) -> ColorDepth {
        self.depth
    }

    /// The color depth as a raw count (`0`, `4`, ..., `16777216`).
    pub fn number_of_colors(&self) -> u32 {
        self.depth.count()
    }

    /// Sets the color depth from a raw count.
    ///
    /// On error the depth and the cache are left untouched.
    pub fn set_color_depth(&mut self, count: u32) -> Result<(), PaletteError> {
        let depth = ColorDepth::from_count(count)?;
        log::debug!("color depth {} -> {}", self.depth, depth);
        self.depth = depth;
        self.invalidate();
        Ok(())
    }

    /// Name of the active distance algorithm.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn distance_algorithm(&self) -> DistanceAlgorithm {
        self.algorithm
    }

    /// Selects a registered distance algorithm by name.
    ///
    /// On error the selection and the cache are left untouched.
    pub fn set_algorithm(&mut self, name: &str) -> Result<(), PaletteError> {
        let algorithm = distance::lookup(name)
            .ok_or_else(|| PaletteError::InvalidAlgorithmName(name.to_string()))?;
        log::debug!("distance algorithm {} -> {}", self.algorithm.name(), name);
        self.algorithm = algorithm;
        self.invalidate();
        Ok(())
    }

    pub fn does_styling(&self) -> bool {
        self.does_styling
    }

    /// Turns styling on or off. With styling off every formatter is `Null`.
    pub fn set_does_styling(&mut self, does_styling: bool) {
        self.does_styling = does_styling;
        self.invalidate();
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Replaces the capability table.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        if !self.cache.is_empty() {
            log::debug!("clearing {} cached formatters", self.cache.len());
        }
        self.cache.clear();
    }

    // ─── Formatters ─────────────────────────────────────────────────────────

    /// Resolves a formatter name such as `"bold_on_seagreen"` or `"aqua"`.
    ///
    /// Only style attributes and color names are accepted. Anything else,
    /// including cursor or screen capabilities like `clear`, gives
    /// [`Formatter::Null`], as do missing capabilities. Results are cached until the session state changes.
    pub fn formatter(&mut self, name: &str) -> Formatter {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }
        let resolved = self.resolve_formatter(name);
        log::trace!("formatter '{}' resolved (active: {})", name, resolved.is_active());
        self.cache.insert(name.to_string(), resolved.clone());
        resolved
    }

    /// Accessor-style lookup, equivalent to [`formatter`](Self::formatter).
    pub fn attr(&mut self, name: &str) -> Formatter {
        self.formatter(name)
    }

    /// Returns `true` if `name` has a memoized formatter.
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Names currently memoized, in no particular order.
    pub fn cached_names(&self) -> impl Iterator<Item = &str> {
        self.cache.keys().map(String::as_str)
    }

    fn resolve_formatter(&self, name: &str) -> Formatter {
        if !self.does_styling {
            return Formatter::Null;
        }
        match formatter::parse(name) {
            Some(tokens) => self.compound(&tokens),
            None => Formatter::Null,
        }
    }

    fn compound(&self, tokens: &[Token<'_>]) -> Formatter {
        let mut start = String::new();
        for token in tokens {
            let sequence = match *token {
                Token::Attribute(capname) => self.capabilities.plain(capname).map(str::to_string),
                Token::Foreground(color) => self.named_color(Layer::Foreground, color),
                Token::Background(color) => self.named_color(Layer::Background, color),
            };
            match sequence {
                Some(sequence) => start.push_str(&sequence),
                None => return Formatter::Null,
            }
        }
        Formatter::active(start, self.capabilities.normal())
    }

    /// Sequence for a color name; `Some("")` when the depth has no color,
    /// `None` when the needed capability is missing.
    fn named_color(&self, layer: Layer, name: &str) -> Option<String> {
        let resolved = match names::lookup(name)? {
            NamedColor::Ansi(index) => self.resolve_index(index),
            NamedColor::Rgb(rgb) => self.resolve_color(rgb),
        };
        self.sequence_for(layer, resolved)
    }

    fn sequence_for(&self, layer: Layer, resolved: Resolved) -> Option<String> {
        match resolved {
            Resolved::None => Some(String::new()),
            color => self.capabilities.compose(layer, color),
        }
    }

    // ─── Colors ─────────────────────────────────────────────────────────────

    /// Resolves `rgb` under the current depth and algorithm.
    pub fn resolve_color(&self, rgb: RgbColor) -> Resolved {
        resolve(rgb, self.depth, &self.algorithm)
    }

    /// Resolves a 256-color index, degrading it when the depth is smaller.
    pub fn resolve_index(&self, index: u8) -> Resolved {
        if self.depth.supports_index(index) {
            Resolved::Index(index)
        } else {
            self.resolve_color(palette::rgb_for_index(index))
        }
    }

    /// Foreground formatter for a 256-color index.
    pub fn color(&self, index: u8) -> Formatter {
        self.color_formatter(Layer::Foreground, self.resolve_index(index))
    }

    /// Background formatter for a 256-color index.
    pub fn on_color(&self, index: u8) -> Formatter {
        self.color_formatter(Layer::Background, self.resolve_index(index))
    }

    /// Foreground formatter for an RGB color.
    ///
    /// At true color this emits a 24-bit sequence; below it, the nearest
    /// palette entry.
    pub fn color_rgb(&self, r: u8, g: u8, b: u8) -> Formatter {
        self.color_formatter(Layer::Foreground, self.resolve_color(RgbColor(r, g, b)))
    }

    /// Background formatter for an RGB color.
    pub fn on_color_rgb(&self, r: u8, g: u8, b: u8) -> Formatter {
        self.color_formatter(Layer::Background, self.resolve_color(RgbColor(r, g, b)))
    }

    /// Foreground formatter for a hex color; `Null` if the hex is malformed.
    pub fn color_hex(&self, hex: &str) -> Formatter {
        self.hex_formatter(Layer::Foreground, hex)
    }

    /// Background formatter for a hex color; `Null` if the hex is malformed.
    pub fn on_color_hex(&self, hex: &str) -> Formatter {
        self.hex_formatter(Layer::Background, hex)
    }

    fn hex_formatter(&self, layer: Layer, hex: &str) -> Formatter {
        match RgbColor::from_hex(hex) {
            Ok(rgb) => self.color_formatter(layer, self.resolve_color(rgb)),
            Err(err) => {
                log::warn!("{}", err);
                Formatter::Null
            }
        }
    }

    fn color_formatter(&self, layer: Layer, resolved: Resolved) -> Formatter {
        if !self.does_styling {
            return Formatter::Null;
        }
        match self.sequence_for(layer, resolved) {
            Some(start) => Formatter::active(start, self.capabilities.normal()),
            None => Formatter::Null,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
