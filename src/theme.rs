//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the views.
//!
//! # Usage
//! ```rust
//! use enrollment_tui::theme::{Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let step_style = Theme::step_style(true, false);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for the help overlay
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for field labels
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    pub const BORDER_ACTIVE: Color = Color::Cyan;

    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Text on a highlighted button
    pub const SELECTED_FG: Color = Color::Black;

    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Progress Step Colors
    // -------------------------------------------------------------------------

    /// Step reached (current or earlier)
    pub const STEP_ACTIVE: Color = Color::Cyan;

    /// The step being shown
    pub const STEP_CURRENT: Color = Color::Yellow;

    /// Step not reached yet
    pub const STEP_PENDING: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted text (placeholders, disabled controls)
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Field label
    pub fn label() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of the focused field
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Border of an unfocused field
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Focused item (cyan highlight)
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Focused, enabled button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Unfocused, enabled button
    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Button whose guard does not hold
    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Stateful style helpers
pub struct Theme;

impl Theme {
    /// Style of one progress header step
    pub fn step_style(reached: bool, current: bool) -> Style {
        if current {
            Style::default()
                .fg(Colors::STEP_CURRENT)
                .add_modifier(Modifier::BOLD)
        } else if reached {
            Style::default().fg(Colors::STEP_ACTIVE)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }

    /// Style of a button given focus and whether it is enabled
    pub fn button_style(focused: bool, enabled: bool) -> Style {
        match (enabled, focused) {
            (false, _) => Styles::button_disabled(),
            (true, true) => Styles::button_active(),
            (true, false) => Styles::button_inactive(),
        }
    }

    /// Border style of a field given focus
    pub fn field_border(focused: bool) -> Style {
        if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_ignores_focus() {
        assert_eq!(Theme::button_style(true, false), Theme::button_style(false, false));
        assert_ne!(Theme::button_style(true, true), Theme::button_style(false, true));
    }

    #[test]
    fn test_step_styles_differ() {
        assert_ne!(Theme::step_style(true, true), Theme::step_style(true, false));
        assert_ne!(Theme::step_style(true, false), Theme::step_style(false, false));
    }
}
