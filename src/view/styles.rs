//! Page styling and color configuration.
//!
//! The palette follows the portfolio's dark theme: white headline text, a
//! purple accent for headings and focus, gray body copy.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors explicitly on or off, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PageStyles =====

/// Styles for every element of the page.
///
/// With colors disabled only text modifiers (bold, dim) remain, so the
/// structure stays readable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStyles {
    /// Hero name.
    pub name: Style,
    /// Typed tagline.
    pub tagline: Style,
    /// Social link URLs.
    pub link: Style,
    /// Section headings.
    pub heading: Style,
    /// Rule under each heading.
    pub rule: Style,
    /// Section body text.
    pub body: Style,
    /// Labels and entry titles.
    pub emphasis: Style,
    /// Company and degree lines.
    pub accent: Style,
    /// Footer and placeholders.
    pub muted: Style,
    /// Skill chips.
    pub chip: Style,
    /// Card box.
    pub card_border: Style,
    /// Card box with keyboard focus.
    pub card_border_focused: Style,
    /// Card heading.
    pub card_title: Style,
    /// Status bar background.
    pub status_bar: Style,
    /// Current section in the status bar.
    pub status_section: Style,
    /// Help overlay border.
    pub help_border: Style,
    /// Help overlay group headings.
    pub help_category: Style,
    /// Keys in the help overlay.
    pub help_key: Style,
}

impl PageStyles {
    /// Build styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                name: bold.fg(Color::White),
                tagline: Style::default().fg(Color::LightMagenta),
                link: Style::default().fg(Color::Cyan),
                heading: bold.fg(Color::LightMagenta),
                rule: Style::default().fg(Color::Magenta),
                body: Style::default().fg(Color::Gray),
                emphasis: bold.fg(Color::White),
                accent: Style::default().fg(Color::LightMagenta),
                muted: Style::default().fg(Color::DarkGray),
                chip: Style::default().fg(Color::LightMagenta),
                card_border: Style::default().fg(Color::DarkGray),
                card_border_focused: bold.fg(Color::Magenta),
                card_title: bold.fg(Color::White),
                status_bar: Style::default().fg(Color::White).bg(Color::DarkGray),
                status_section: bold.fg(Color::Black).bg(Color::Magenta),
                help_border: Style::default().fg(Color::Magenta),
                help_category: bold.fg(Color::LightMagenta),
                help_key: bold.fg(Color::Yellow),
            }
        } else {
            let dim = Style::default().add_modifier(Modifier::DIM);
            Self {
                name: bold,
                tagline: Style::default(),
                link: Style::default().add_modifier(Modifier::UNDERLINED),
                heading: bold,
                rule: Style::default(),
                body: Style::default(),
                emphasis: bold,
                accent: Style::default(),
                muted: dim,
                chip: Style::default(),
                card_border: Style::default(),
                card_border_focused: bold,
                card_title: bold,
                status_bar: Style::default().add_modifier(Modifier::REVERSED),
                status_section: bold.add_modifier(Modifier::REVERSED),
                help_border: Style::default(),
                help_category: bold,
                help_key: bold,
            }
        }
    }
}

impl Default for PageStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::with_colors(true))
    }
}

// ===== Tests =====
