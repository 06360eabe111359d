//! Pure state transitions: (Navigator, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! The navigator is taken by value; the returned transition carries the
//! navigator the effects layer should adopt.

use super::state::{Action, Transition};
use crate::deck::Navigator;

/// Pure state transition function.
pub fn update(mut navigator: Navigator, action: &Action) -> Transition {
    match action {
        Action::Next => {
            navigator.advance();
            Transition::Slide(navigator)
        }
        Action::Prev => {
            navigator.retreat();
            Transition::Slide(navigator)
        }
        Action::GoTo(index) => match navigator.jump_to(*index) {
            Ok(()) => Transition::Slide(navigator),
            Err(error) => Transition::Rejected { navigator, error },
        },
        Action::First => {
            navigator.first();
            Transition::Slide(navigator)
        }
        Action::Last => {
            navigator.last();
            Transition::Slide(navigator)
        }
        Action::ScrollUp => Transition::Scroll(-1),
        Action::ScrollDown => Transition::Scroll(1),
        Action::ToggleHelp => Transition::ToggleHelp,
        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// TESTS
// ============================================================================
