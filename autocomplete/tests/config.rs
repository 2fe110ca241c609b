use std::io::Write;

use autocomplete::{
    Autocomplete, AutocompleteConfig, AutocompleteProps, Color, DefaultTheme, Error, Rgb, Style,
};

const SAMPLE: &str = r##"
label = "Choose preferred work locations"
placeholder = "Type a Country"
max_visible_items = 6

[styles]
highlight_item_bg = "#a277ff"

[styles.label]
foreground = "rebeccapurple"
bold = true
"##;

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_config() {
    let config = AutocompleteConfig::from_toml_str(SAMPLE).unwrap();

    assert_eq!(config.label.as_deref(), Some("Choose preferred work locations"));
    assert_eq!(config.placeholder.as_deref(), Some("Type a Country"));
    assert_eq!(config.max_visible_items, Some(6));
    assert_eq!(config.hide_toggle_button, None);

    let styles = config.styles.unwrap();
    assert_eq!(styles.highlight_item_bg, Color::rgb(162, 119, 255));
    assert_eq!(
        styles.label,
        Style::new().foreground(Color::named("rebeccapurple")).bold()
    );
    // untouched entries keep their defaults
    assert_eq!(styles.create_item.foreground, Some(Color::named("black")));
}

#[test]
fn test_empty_config_is_default() {
    let config = AutocompleteConfig::from_toml_str("").unwrap();
    assert_eq!(config, AutocompleteConfig::default());
}

#[test]
fn test_invalid_color_is_config_error() {
    let err = AutocompleteConfig::from_toml_str("[styles]\nhighlight_item_bg = \"not a color!\"")
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = AutocompleteConfig::from_toml_str("max_visible_items = \"six\"").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

// ============================================================================
// Applying to props
// ============================================================================

#[test]
fn test_apply_overrides_only_set_fields() {
    let props = AutocompleteProps::new().label("Country").placeholder("Type");
    let config = AutocompleteConfig {
        placeholder: Some("Type a Country".into()),
        hide_toggle_button: Some(true),
        max_visible_items: Some(0),
        ..Default::default()
    };

    let props = config.apply(props);
    assert_eq!(props.label, "Country");
    assert_eq!(props.placeholder, "Type a Country");
    assert!(props.hide_toggle_button);
    assert!(!props.disable_create_item);
    assert_eq!(props.max_visible_items, 1);
}

#[test]
fn test_huge_visible_rows_from_config() {
    let config = AutocompleteConfig::from_toml_str("max_visible_items = 65535").unwrap();
    let props = config.apply(AutocompleteProps::new().label("Country"));
    assert_eq!(Autocomplete::multiple(props).max_height(), u16::MAX);
}

#[test]
fn test_apply_replaces_styles() {
    let config = AutocompleteConfig::from_toml_str(SAMPLE).unwrap();
    let props = config.apply(AutocompleteProps::new());
    assert_eq!(props.styles.highlight_item_bg, Color::rgb(162, 119, 255));
    assert_eq!(props.max_visible_items, 6);
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = AutocompleteConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AutocompleteConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let config = AutocompleteConfig::load_from(file.path()).unwrap();
    assert_eq!(config.max_visible_items, Some(6));
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_parse_colors() {
    assert_eq!("#a277ff".parse::<Color>().unwrap(), Color::rgb(162, 119, 255));
    assert_eq!("rgb(1, 2, 3)".parse::<Color>().unwrap(), Color::rgb(1, 2, 3));
    assert_eq!(
        "oklch(0.7, 0.1, 200)".parse::<Color>().unwrap(),
        Color::oklch(0.7, 0.1, 200.0)
    );
    assert_eq!("gray.100".parse::<Color>().unwrap(), Color::named("gray.100"));
}

#[test]
fn test_reject_bad_colors() {
    let inputs = [
        "#zz0000",
        "#+f+f+f",
        "#-1-1-1",
        "#fff",
        "rgb(1, 2)",
        "rgb(1, 2, 300)",
        "red!",
        "",
    ];
    for input in inputs {
        assert!(
            matches!(input.parse::<Color>(), Err(Error::InvalidColor(_))),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_color_display_round_trips_through_config() {
    assert_eq!(Color::rgb(162, 119, 255).to_string(), "#a277ff");
    assert_eq!(Color::named("teal.500").to_string(), "teal.500");
}

#[test]
fn test_resolve_against_theme() {
    let theme = DefaultTheme::new();
    let fallback = Rgb::new(1, 2, 3);

    assert_eq!(
        Color::named("gray.100").resolve(&theme, fallback),
        Rgb::new(70, 70, 90)
    );
    assert_eq!(Color::named("nope").resolve(&theme, fallback), fallback);
    assert_eq!(Color::rgb(9, 8, 7).resolve(&theme, fallback), Rgb::new(9, 8, 7));

    let theme = theme.with("accent", Color::rgb(10, 20, 30));
    assert_eq!(
        Color::named("accent").resolve(&theme, fallback),
        Rgb::new(10, 20, 30)
    );
}

#[test]
fn test_oklch_white_resolves_to_white() {
    let white = Color::oklch(1.0, 0.0, 0.0).resolve(&DefaultTheme::new(), Rgb::default());
    assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
}
