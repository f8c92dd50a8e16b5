//! Theme support for the carousel GUI
//!
//! Built-in colour schemes (Light, Dark, Dracula, One Dark Pro) for the chrome
//! around the slides: panels, controls, indicators and caption overlays.
//! Slide backgrounds come from the deck and are not themed.
//!
//! # Examples
//!
//! ```
//! use rcarousel::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula stage: {:?}", dracula.colors.stage_background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Colour palette for everything the carousel draws besides slide content
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Surfaces
    pub panel_background: Color32,
    pub stage_background: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Controls
    pub control_fill: Color32,
    pub control_hover: Color32,
    pub accent: Color32,

    // Indicators (the active one takes its slide's colour)
    pub indicator_idle: Color32,
    pub indicator_border: Color32,

    // Caption band drawn over the slide
    pub caption_overlay: Color32,

    pub error: Color32,
}

/// The dark palette, used whenever a named theme cannot be found.
impl Default for ThemeColors {
    fn default() -> Self {
        dark_theme().colors
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme(), one_dark_pro_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names in alphabetical order
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Builds egui visuals for a theme
    pub fn visuals_for(&self, theme: &Theme) -> egui::Visuals {
        let colors = &theme.colors;
        let mut visuals = if theme.dark { egui::Visuals::dark() } else { egui::Visuals::light() };

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.stage_background;
        visuals.override_text_color = Some(colors.text);

        visuals.widgets.inactive.weak_bg_fill = colors.control_fill;
        visuals.widgets.inactive.bg_fill = colors.control_fill;
        visuals.widgets.hovered.weak_bg_fill = colors.control_hover;
        visuals.widgets.hovered.bg_fill = colors.control_hover;
        visuals.widgets.active.bg_fill = colors.accent;

        visuals.selection.bg_fill = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        dark: false,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(246, 246, 246),
            stage_background: Color32::from_rgb(225, 225, 225),
            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),
            control_fill: Color32::from_rgb(220, 220, 220),
            control_hover: Color32::from_rgb(200, 200, 200),
            accent: Color32::from_rgb(40, 100, 200),
            indicator_idle: Color32::from_rgb(190, 190, 190),
            indicator_border: Color32::from_rgb(120, 120, 120),
            caption_overlay: with_alpha(Color32::from_rgb(255, 255, 255), 170),
            error: Color32::from_rgb(200, 40, 40),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        dark: true,
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            stage_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(230, 230, 230),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),
            control_fill: Color32::from_rgb(60, 60, 60),
            control_hover: Color32::from_rgb(80, 80, 80),
            accent: Color32::from_rgb(52, 152, 219),
            indicator_idle: Color32::from_rgb(90, 90, 90),
            indicator_border: Color32::from_rgb(140, 140, 140),
            caption_overlay: with_alpha(Color32::from_rgb(0, 0, 0), 150),
            error: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Palette from https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        dark: true,
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            stage_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#ffffff"),
            control_fill: hex_to_color32("#44475a"),
            control_hover: adjust_brightness(hex_to_color32("#44475a"), 1.3),
            accent: hex_to_color32("#bd93f9"),
            indicator_idle: hex_to_color32("#44475a"),
            indicator_border: hex_to_color32("#6272a4"),
            caption_overlay: with_alpha(hex_to_color32("#21222c"), 170),
            error: hex_to_color32("#ff5555"),
        },
    }
}

/// Palette from https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        dark: true,
        colors: ThemeColors {
            panel_background: hex_to_color32("#282c34"),
            stage_background: hex_to_color32("#21252b"),
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),
            text_strong: hex_to_color32("#dcdfe4"),
            control_fill: hex_to_color32("#3e4451"),
            control_hover: hex_to_color32("#4b5263"),
            accent: hex_to_color32("#61afef"),
            indicator_idle: hex_to_color32("#4b5263"),
            indicator_border: hex_to_color32("#5c6370"),
            caption_overlay: with_alpha(hex_to_color32("#21252b"), 170),
            error: hex_to_color32("#e06c75"),
        },
    }
}

/// Converts "#rrggbb" to a colour; malformed input yields black
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color32::BLACK;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
}

/// Scales each channel by `factor`, saturating at 255
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
