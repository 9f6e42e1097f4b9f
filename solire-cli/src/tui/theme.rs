//! Earth-tone theme for the solire TUI
//!
//! Centralized palette leaning on soil and vegetation colors so the
//! dashboard reads like the field data it shows.

use ratatui::style::{Color, Modifier, Style};
use solire_core::Confidence;

/// Earth-tone color theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Primary accent colors
    pub loam: Color,
    pub leaf: Color,
    pub clay: Color,
    pub water: Color,

    // UI semantic colors
    pub focus_border: Color,
    pub unfocus_border: Color,
    pub selection_fg: Color,
    pub active_link: Color,

    // Status colors
    pub success: Color,
    pub error: Color,
    pub warning: Color,

    // Confidence tier colors
    pub confidence_high: Color,
    pub confidence_medium: Color,
    pub confidence_low: Color,
    pub confidence_very_low: Color,

    // Background
    pub bg_level0: Color,
    pub scrim_bg: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::earth()
    }
}

impl Theme {
    /// Earth-tone palette
    pub fn earth() -> Self {
        Self {
            // Accents
            loam: Color::Rgb(181, 137, 87),  // Loam brown
            leaf: Color::Rgb(142, 192, 124), // Leaf green
            clay: Color::Rgb(214, 133, 93),  // Terracotta
            water: Color::Rgb(125, 174, 198), // Irrigation blue

            // UI semantic
            focus_border: Color::Rgb(216, 184, 125), // Straw
            unfocus_border: Color::Rgb(92, 84, 72),  // Dry bark
            selection_fg: Color::Rgb(235, 226, 209), // Chalk
            active_link: Color::Rgb(142, 192, 124),  // Leaf green

            // Status
            success: Color::Rgb(142, 192, 124),
            error: Color::Rgb(204, 102, 102),
            warning: Color::Rgb(216, 184, 125),

            // Confidence tiers
            confidence_high: Color::Rgb(142, 192, 124),    // Leaf
            confidence_medium: Color::Rgb(216, 184, 125),  // Straw
            confidence_low: Color::Rgb(214, 133, 93),      // Terracotta
            confidence_very_low: Color::Rgb(204, 102, 102), // Red

            // Background
            bg_level0: Color::Rgb(34, 30, 26), // Dark humus
            scrim_bg: Color::Rgb(20, 18, 15),  // Near-black soil

            // Text hierarchy
            text_primary: Color::Rgb(235, 226, 209),
            text_secondary: Color::Rgb(180, 170, 152),
            text_disabled: Color::Rgb(120, 112, 98),
        }
    }

    // ========== Style Helpers ==========

    /// Style for focused panel border
    pub fn focused_border_style(&self) -> Style {
        Style::default()
            .fg(self.focus_border)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unfocused panel border
    pub fn unfocused_border_style(&self) -> Style {
        Style::default().fg(self.unfocus_border)
    }

    /// Style for the item under the cursor (panel focused)
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the item under the cursor when the panel is not focused
    pub fn selection_unfocused_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for normal (non-selected) items
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the active navigation link
    pub fn active_link_style(&self) -> Style {
        Style::default()
            .fg(self.active_link)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the compact-layout scrim
    pub fn scrim_style(&self) -> Style {
        Style::default().fg(self.text_disabled).bg(self.scrim_bg)
    }

    /// Color for a recommendation confidence tier
    pub fn confidence_color(&self, confidence: Confidence) -> Color {
        match confidence {
            Confidence::High => self.confidence_high,
            Confidence::Medium => self.confidence_medium,
            Confidence::Low => self.confidence_low,
            Confidence::VeryLow => self.confidence_very_low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        // Leaf green #8ec07c
        assert_eq!(theme.leaf, Color::Rgb(142, 192, 124));
        assert_eq!(theme.confidence_color(Confidence::High), theme.leaf);
    }
}
