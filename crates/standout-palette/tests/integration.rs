//! Integration tests for standout-palette.
//!
//! These exercise sessions end to end: state setters, cache invalidation,
//! formatter resolution and color downconversion.

use standout_palette::{
    distance, resolve, Capabilities, ColorDepth, Formatter, PaletteError, Resolved, RgbColor,
    Session,
};

const DEPTHS: [u32; 6] = [0, 4, 8, 16, 256, 1 << 24];

// ============================================================================
// Depth and algorithm state
// ============================================================================

#[test_log::test]
fn set_number_of_colors_clears_cache() {
    let mut session = Session::new();
    for count in DEPTHS {
        session.attr("aqua");
        assert!(session.is_cached("aqua"));
        session.set_color_depth(count).unwrap();
        assert_eq!(session.number_of_colors(), count);
        assert!(!session.is_cached("aqua"));
    }

    let err = session.set_color_depth(40).unwrap_err();
    assert!(matches!(err, PaletteError::InvalidDepth(40)));
    assert_eq!(session.number_of_colors(), 1 << 24);
}

#[test_log::test]
fn set_color_distance_algorithm_clears_cache() {
    let mut session = Session::new();
    for name in distance::names() {
        session.attr("aqua");
        assert!(session.is_cached("aqua"));
        session.set_algorithm(name).unwrap();
        assert_eq!(session.algorithm(), name);
        assert!(!session.is_cached("aqua"));
    }

    let err = session.set_algorithm("EenieMeenieMineyMo").unwrap_err();
    assert!(matches!(err, PaletteError::InvalidAlgorithmName(ref n) if n == "EenieMeenieMineyMo"));
    assert_eq!(session.algorithm(), "cie2000");
}

#[test]
fn failed_setter_keeps_cache() {
    let mut session = Session::new();
    session.formatter("aqua");
    assert!(session.set_color_depth(40).is_err());
    assert!(session.set_algorithm("nope").is_err());
    assert!(session.is_cached("aqua"));
}

// ============================================================================
// Formatters
// ============================================================================

#[test]
fn formatter_matches_accessor() {
    let mut session = Session::new();

    session.set_color_depth(1 << 24).unwrap();
    let bold_on_seagreen = session.formatter("bold_on_seagreen");
    assert!(bold_on_seagreen.is_active());
    assert_eq!(bold_on_seagreen, session.attr("bold_on_seagreen"));

    session.set_color_depth(0).unwrap();
    let bold_on_seagreen = session.formatter("bold_on_seagreen");
    assert!(bold_on_seagreen.is_active());
    assert_eq!(bold_on_seagreen, session.attr("bold_on_seagreen"));

    let bold = session.formatter("bold");
    assert!(bold.is_active());
    assert_eq!(bold, session.attr("bold"));
}

#[test]
fn formatter_without_styling_is_null() {
    let mut session = Session::new().with_styling(false);
    session.set_color_depth(0).unwrap();
    let bold_on_seagreen = session.formatter("bold_on_seagreen");
    assert_eq!(bold_on_seagreen, Formatter::Null);
    assert_eq!(bold_on_seagreen, session.attr("bold_on_seagreen"));
}

#[test]
fn formatter_invalid_is_null() {
    let mut session = Session::with_capabilities(Capabilities::xterm().without("csr"));
    let csr = session.formatter("csr");
    assert_eq!(csr, Formatter::Null);
    assert_eq!(csr.wrap("smoo"), "smoo");
}

#[test]
fn formatter_cache_hit_is_stable() {
    let mut session = Session::new();
    let first = session.formatter("bold_on_seagreen");
    assert!(session.is_cached("bold_on_seagreen"));
    let second = session.formatter("bold_on_seagreen");
    assert_eq!(first, second);
    assert_eq!(session.cached_names().count(), 1);
}

#[test]
fn wrapped_text_only_gains_escapes() {
    let mut session = Session::new().with_color_depth(ColorDepth::TrueColor);
    for name in ["bold_on_seagreen", "underline_red", "aqua", "on_bright_blue"] {
        let wrapped = session.formatter(name).wrap("smoo");
        assert_ne!(wrapped, "smoo", "{}", name);
        assert_eq!(console::strip_ansi_codes(&wrapped), "smoo", "{}", name);
    }
}

#[test]
fn nested_formatters_restore_outer_style() {
    let mut session = Session::new();
    let bold = session.formatter("bold");
    let red = session.formatter("red");
    let nested = bold.wrap(&format!("a{}b", red.wrap("x")));
    // After the inner reset, bold is switched back on before "b".
    assert!(nested.contains(&format!("x{}{}b", bold.stop(), bold.start())));
}

// ============================================================================
// Color resolution
// ============================================================================

#[test]
fn resolve_true_color_passes_through() {
    for algo in distance::algorithms() {
        assert_eq!(
            resolve(RgbColor(84, 192, 233), ColorDepth::TrueColor, algo),
            Resolved::Rgb(RgbColor(84, 192, 233))
        );
    }
}

#[test]
fn resolve_black_is_deterministic() {
    for algo in distance::algorithms() {
        let first = resolve(RgbColor(0, 0, 0), ColorDepth::Ansi256, algo);
        let second = resolve(RgbColor(0, 0, 0), ColorDepth::Ansi256, algo);
        assert_eq!(first, Resolved::Index(0));
        assert_eq!(first, second);
    }
}

#[test]
fn color_rgb_sequences() {
    let mut session = Session::new().with_color_depth(ColorDepth::TrueColor);
    let normal = session.capabilities().normal().to_string();

    assert_eq!(
        session.color_rgb(0, 0, 0).wrap("smoo"),
        format!("\x1b[38;2;0;0;0msmoo{}", normal)
    );
    assert_eq!(
        session.color_rgb(84, 192, 233).wrap("smoo"),
        format!("\x1b[38;2;84;192;233msmoo{}", normal)
    );
    assert_eq!(
        session.on_color_rgb(84, 192, 233).wrap("smoo"),
        format!("\x1b[48;2;84;192;233msmoo{}", normal)
    );

    session.set_color_depth(256).unwrap();
    let black = session.formatter("black");
    assert_eq!(
        session.color_rgb(0, 0, 0).wrap("smoo"),
        format!("{}smoo{}", black.start(), normal)
    );
    assert!(session.color_rgb(84, 192, 233).start().starts_with("\x1b[38;5;"));
    assert!(session.on_color_rgb(84, 192, 233).start().starts_with("\x1b[48;5;"));
}

#[test]
fn rgb_color_hex() {
    assert_eq!(RgbColor(0x5a, 0x05, 0xcb).to_string(), "#5a05cb");
    assert_eq!(RgbColor(0x5a, 0x05, 0xcb).to_hex(), "#5a05cb");
}
