//! TUI color semantics and style constants.
//!
//! The deck is dark-on-blue: white headings, dimmed body text, a blue
//! highlight for the active tab and a blue→purple progress bar.
//!
//! Color semantics:
//! - Blue: active / selected (current tab, first half of the progress fill)
//! - Purple: second half of the progress fill
//! - Cyan: interactive elements (keybinding hints, arrows)
//! - Dim: de-emphasized (inactive tabs, captions, empty progress)
//! - Bold: headings and highlighted figures
//! - Section accents map through [`accent_style`]

use ratatui::style::{Color, Modifier, Style};

use crate::types::Accent;

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Deck title in the header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Deck subtitle in the header.
pub const STYLE_SUBTITLE: Style = Style::new().fg(Color::LightBlue);

/// Active navigation tab.
pub const STYLE_TAB_ACTIVE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// Inactive navigation tab.
pub const STYLE_TAB: Style = Style::new().fg(Color::Gray);

/// Slide heading.
pub const STYLE_HEADING: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Section title.
pub const STYLE_SECTION: Style = Style::new().add_modifier(Modifier::BOLD);

/// Body text.
pub const STYLE_BODY: Style = Style::new().fg(Color::White);

/// De-emphasized text: captions, status, separators.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Previous/next arrows and keybinding hints.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// Rejected-action notice.
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow);

/// Closing banner.
pub const STYLE_BANNER: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Magenta)
    .add_modifier(Modifier::BOLD);

/// Progress bar fill, left half of the bar.
pub const STYLE_PROGRESS: Style = Style::new().fg(Color::LightBlue);

/// Progress bar fill, right half of the bar.
pub const STYLE_PROGRESS_END: Style = Style::new().fg(Color::LightMagenta);

/// Progress bar track.
pub const STYLE_PROGRESS_TRACK: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// ACCENTS
// ============================================================================

/// Terminal colour for a section accent.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::LightBlue,
        Accent::Purple => Color::LightMagenta,
        Accent::Green => Color::LightGreen,
        Accent::Red => Color::LightRed,
        Accent::Yellow => Color::Yellow,
        Accent::Orange => Color::Rgb(251, 146, 60),
        Accent::Neutral => Color::Gray,
    }
}

/// Foreground style for an accent.
pub fn accent_style(accent: Accent) -> Style {
    Style::new().fg(accent_color(accent))
}

// ============================================================================
// TESTS
// ============================================================================
