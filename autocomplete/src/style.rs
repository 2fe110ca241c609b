//! Colors, text styles and the widget's style props.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color as written in style props: concrete, or a theme name such as
/// `gray.100` resolved at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
    Named(String),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Resolve to a concrete color. Names the theme does not know fall back
    /// to `fallback`.
    pub fn resolve(&self, theme: &dyn Theme, fallback: Rgb) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
            Self::Named(name) => match theme.resolve(name) {
                // A theme entry that is itself a name is not followed further
                Some(Color::Named(_)) | None => {
                    log::trace!("unresolved color {:?}", name);
                    fallback
                }
                Some(color) => color.resolve(theme, fallback),
            },
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Oklch { l, c, h } => write!(f, "oklch({l}, {c}, {h})"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

fn parse_args<const N: usize, T: FromStr>(args: &str) -> Option<[T; N]> {
    let parts: Vec<T> = args
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;
    parts.try_into().ok()
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#rrggbb`, `rgb(r, g, b)`, `oklch(l, c, h)` or a theme name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(args) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
            let [r, g, b] = parse_args::<3, u8>(args).ok_or_else(invalid)?;
            return Ok(Self::rgb(r, g, b));
        }

        if let Some(args) = s.strip_prefix("oklch(").and_then(|rest| rest.strip_suffix(')')) {
            let [l, c, h] = parse_args::<3, f32>(args).ok_or_else(invalid)?;
            return Ok(Self::oklch(l, c, h));
        }

        let valid_name = !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if valid_name {
            Ok(Self::Named(s.to_string()))
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color name. Returns None if the name is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Dark terminal palette with the color names the default style props use.
pub struct DefaultTheme {
    colors: Vec<(&'static str, Color)>,
}

impl DefaultTheme {
    pub fn new() -> Self {
        Self {
            colors: vec![
                ("text", Color::rgb(230, 230, 235)),
                ("muted", Color::rgb(140, 140, 150)),
                ("surface", Color::rgb(30, 30, 38)),
                ("background", Color::rgb(0, 0, 0)),
                ("white", Color::rgb(255, 255, 255)),
                ("black", Color::rgb(0, 0, 0)),
                ("gray.100", Color::rgb(70, 70, 90)),
                ("gray.500", Color::rgb(113, 128, 150)),
                ("gray.700", Color::rgb(45, 55, 72)),
                ("green.500", Color::rgb(56, 161, 105)),
                ("yellow.300", Color::rgb(246, 224, 94)),
                ("teal.500", Color::rgb(49, 151, 149)),
                ("purple.400", Color::rgb(162, 119, 255)),
                ("red.500", Color::rgb(229, 62, 62)),
                ("rebeccapurple", Color::rgb(102, 51, 153)),
            ],
        }
    }

    /// Override or add a named color.
    pub fn with(mut self, name: &'static str, color: Color) -> Self {
        self.colors.retain(|(n, _)| *n != name);
        self.colors.push((name, color));
        self
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        self.colors
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, color)| color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reversed: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            reversed: false,
        }
    }

    /// Combine two styles; an attribute set in either is set in the result.
    pub fn union(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            reversed: self.reversed || other.reversed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    #[serde(flatten)]
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Layer `overrides` on top of this style.
    pub fn patch(&self, overrides: &Style) -> Style {
        Style {
            background: overrides
                .background
                .clone()
                .or_else(|| self.background.clone()),
            foreground: overrides
                .foreground
                .clone()
                .or_else(|| self.foreground.clone()),
            text_style: self.text_style.union(overrides.text_style),
        }
    }
}

/// The marker drawn next to selected items in the dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectedIcon {
    pub glyph: char,
    pub style: Style,
}

impl Default for SelectedIcon {
    fn default() -> Self {
        Self {
            glyph: '✔',
            style: Style::new().foreground(Color::named("green.500")),
        }
    }
}

/// Style overrides for every part of the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleProps {
    pub label: Style,
    pub input: Style,
    pub input_focused: Style,
    pub placeholder: Style,
    pub toggle_button: Style,
    pub tag: Style,
    pub list: Style,
    pub list_item: Style,
    /// Background of the highlighted dropdown row.
    pub highlight_item_bg: Color,
    /// The quoted text of the creation row.
    pub create_item: Style,
    /// Emphasis for the parts of a label matching the input.
    pub match_highlight: Style,
    pub selected_icon: SelectedIcon,
}

impl Default for StyleProps {
    fn default() -> Self {
        Self {
            label: Style::new().foreground(Color::named("text")).bold(),
            input: Style::new()
                .foreground(Color::named("text"))
                .background(Color::named("gray.700")),
            input_focused: Style::new().background(Color::rgb(80, 80, 100)),
            placeholder: Style::new().foreground(Color::named("muted")).dim(),
            toggle_button: Style::new()
                .foreground(Color::named("muted"))
                .background(Color::named("gray.700")),
            tag: Style::new()
                .foreground(Color::named("white"))
                .background(Color::named("teal.500")),
            list: Style::new()
                .foreground(Color::named("text"))
                .background(Color::named("surface")),
            list_item: Style::new(),
            highlight_item_bg: Color::named("gray.100"),
            create_item: Style::new()
                .foreground(Color::named("black"))
                .background(Color::named("yellow.300"))
                .bold(),
            match_highlight: Style::new().bold().underline(),
            selected_icon: SelectedIcon::default(),
        }
    }
}
