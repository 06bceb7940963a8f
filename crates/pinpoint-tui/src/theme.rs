//! Colour theme for the pinpoint TUI.
//!
//! The theme is a TOML file embedded in the binary via [`include_str!`] so
//! the application works without any files on disk. Marker colours are not
//! themed: they come from the layer specs' renderer constants (red base,
//! blue highlight, green nearby) and are resolved with [`parse_color`].

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    border: RawBorder,
    text: RawText,
    results: RawResults,
    popup: RawPopup,
}

#[derive(Debug, Deserialize)]
struct RawBorder {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    hint: RawStyle,
    status: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    cursor: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawPopup {
    title: RawStyle,
    body: RawStyle,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,
    pub hint: Style,
    pub status: Style,
    pub error: Style,
    pub result_cursor: Style,
    pub popup_title: Style,
    pub popup_body: Style,
}

impl Theme {
    pub fn load_default() -> Self {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(DEFAULT_THEME_SRC, FileFormat::Toml))
            .build()
            .expect("embedded theme must be valid TOML")
            .try_deserialize()
            .expect("embedded theme must deserialize correctly");

        Self {
            border_focused: raw.border.focused.into_style(),
            border_unfocused: raw.border.unfocused.into_style(),
            hint: raw.text.hint.into_style(),
            status: raw.text.status.into_style(),
            error: raw.text.error.into_style(),
            result_cursor: raw.results.cursor.into_style(),
            popup_title: raw.popup.title.into_style(),
            popup_body: raw.popup.body.into_style(),
        }
    }
}

/// Resolve a colour name (or `#rrggbb` value) to a ratatui [`Color`].
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        // get() rejects slices that land inside a multibyte character
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        _ => None,
    }
}
