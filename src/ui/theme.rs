//! Theme definitions for exorcism-guide
//!
//! Two built-in themes matching the persisted preference: Dark and Light.
//! Each theme defines colors for all UI elements.

use crate::types::ThemePreference;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Content colors
    pub heading: Color,
    pub prayer_text: Color,
}

impl Theme {
    /// Create a theme from the persisted preference
    pub fn from_preference(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Base
            bg: Color::Rgb(18, 18, 24),           // #121218
            fg: Color::Rgb(224, 224, 224),        // #e0e0e0
            fg_dim: Color::Rgb(136, 136, 146),    // #888892

            // Accent (crimson)
            accent: Color::Rgb(196, 30, 58),      // #c41e3a
            accent_dim: Color::Rgb(139, 21, 41),  // #8b1529

            // Status
            success: Color::Rgb(46, 204, 113),    // #2ecc71
            error: Color::Rgb(231, 76, 60),       // #e74c3c

            // UI elements
            border: Color::Rgb(58, 58, 70),       // #3a3a46
            border_focused: Color::Rgb(196, 30, 58),
            selection_bg: Color::Rgb(58, 30, 40), // #3a1e28
            selection_fg: Color::Rgb(255, 255, 255),

            // Content
            heading: Color::Rgb(212, 175, 55),    // #d4af37 (gold)
            prayer_text: Color::Rgb(236, 226, 208), // #ece2d0
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            // Base
            bg: Color::Rgb(247, 244, 236),        // #f7f4ec
            fg: Color::Rgb(44, 44, 44),           // #2c2c2c
            fg_dim: Color::Rgb(120, 116, 108),    // #78746c

            // Accent
            accent: Color::Rgb(160, 24, 47),      // #a0182f
            accent_dim: Color::Rgb(196, 30, 58),  // #c41e3a

            // Status
            success: Color::Rgb(39, 174, 96),     // #27ae60
            error: Color::Rgb(192, 57, 43),       // #c0392b

            // UI elements
            border: Color::Rgb(206, 200, 186),    // #cec8ba
            border_focused: Color::Rgb(160, 24, 47),
            selection_bg: Color::Rgb(235, 214, 214), // #ebd6d6
            selection_fg: Color::Rgb(20, 20, 20),

            // Content
            heading: Color::Rgb(140, 100, 20),    // #8c6414
            prayer_text: Color::Rgb(60, 48, 36),  // #3c3024
        }
    }

    // Style helpers for common UI patterns

    /// Background for full blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Section heading inside content
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Prayer body text
    pub fn prayer(&self) -> Style {
        Style::default()
            .fg(self.prayer_text)
            .bg(self.bg)
            .add_modifier(Modifier::ITALIC)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Interactive control (not focused)
    pub fn control(&self) -> Style {
        Style::default().fg(self.accent_dim).bg(self.bg)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Tab style (active)
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}
