use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme. Falls back to the default if none was installed.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

/// Install the theme for the rest of the process. Only the first call wins.
pub fn install(theme: Theme) {
    if THEME.set(theme).is_err() {
        tracing::debug!("theme already installed; keeping the first one");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    pub today: Style,
    pub selected: Style,
    pub cursor: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub accent: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            today: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            accent: Style::default().fg(Color::Cyan),
        }
    }
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            today: Style::default().fg(Color::Rgb(189, 147, 249)).add_modifier(Modifier::BOLD), // purple
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(139, 233, 253)), // cyan
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().fg(Color::Rgb(248, 248, 242)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
            accent: Style::default().fg(Color::Rgb(80, 250, 123)),
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            today: Style::default().fg(Color::Rgb(250, 189, 47)).add_modifier(Modifier::BOLD), // yellow
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(131, 165, 152)), // aqua
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().fg(Color::Rgb(235, 219, 178)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            status: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(80, 73, 69)),
            accent: Style::default().fg(Color::Rgb(184, 187, 38)),
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            today: Style::default().fg(Color::Rgb(235, 203, 139)).add_modifier(Modifier::BOLD), // yellow
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(136, 192, 208)), // frost
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().fg(Color::Rgb(229, 233, 240)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(Color::Rgb(67, 76, 94)),
            status: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(67, 76, 94)),
            accent: Style::default().fg(Color::Rgb(143, 188, 187)),
        }
    }
}

/// The `[theme]` table of the config file.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub today_fg: Option<String>,
    pub today_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub cursor_fg: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub accent_fg: Option<String>,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Theme {
        // Start from preset or default
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        let overrides: [(&Option<String>, fn(&mut Theme, Color)); 11] = [
            (&self.today_fg, |t, c| t.today = t.today.fg(c)),
            (&self.today_bg, |t, c| t.today = t.today.bg(c)),
            (&self.selected_fg, |t, c| t.selected = t.selected.fg(c)),
            (&self.selected_bg, |t, c| t.selected = t.selected.bg(c)),
            (&self.cursor_fg, |t, c| t.cursor = t.cursor.fg(c)),
            (&self.header_fg, |t, c| t.header = t.header.fg(c)),
            (&self.dim_fg, |t, c| t.dim = t.dim.fg(c)),
            (&self.border_fg, |t, c| t.border = t.border.fg(c)),
            (&self.status_fg, |t, c| t.status = t.status.fg(c)),
            (&self.status_bg, |t, c| t.status = t.status.bg(c)),
            (&self.accent_fg, |t, c| t.accent = t.accent.fg(c)),
        ];

        for (value, apply) in overrides {
            match value.as_deref().map(|s| (s, parse_color(s))) {
                Some((_, Some(color))) => apply(&mut theme, color),
                Some((raw, None)) => tracing::warn!(value = raw, "ignoring unknown colour"),
                None => {}
            }
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_color(" DarkGrey "), Some(Color::DarkGray));
        assert_eq!(parse_color("#ff80"), None);
        assert_eq!(parse_color("#gg0000"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn unknown_preset_is_default() {
        assert_eq!(Theme::preset("solarized"), Theme::default());
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let config = ThemeConfig {
            preset: Some("nord".to_string()),
            selected_bg: Some("#010203".to_string()),
            status_fg: Some("not-a-colour".to_string()),
            ..ThemeConfig::default()
        };
        let theme = config.into_theme();
        let nord = Theme::preset("nord");
        assert_eq!(theme.name, "nord");
        assert_eq!(theme.selected, nord.selected.bg(Color::Rgb(1, 2, 3)));
        assert_eq!(theme.status, nord.status);
    }
}
