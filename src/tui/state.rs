//! TUI state algebra: pure types, zero effects.
//!
//! The only navigation state is the [`Navigator`]; the App adds presentation
//! flags around it (help overlay, last rejected jump, quit). The transition
//! function and rendering layer both program against these types.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::deck::{DeckError, Navigator};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// A single reader thread forwards crossterm events. Key and mouse events go
/// through `map_key`/`map_mouse → update`; resizes only trigger a redraw.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current position in the deck.
    pub navigator: Navigator,

    /// Show the key reference instead of the status hint.
    pub show_help: bool,

    /// Message from the last rejected action, cleared on the next accepted one.
    pub notice: Option<String>,

    /// Use ASCII fallbacks for every icon.
    pub ascii_icons: bool,

    /// Vertical scroll offset of the slide body. Reset on every slide change.
    pub scroll: u16,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Next slide (wraps).
    Next,
    /// Previous slide (wraps).
    Prev,
    /// Jump to a 0-based slide index.
    GoTo(usize),
    /// First slide.
    First,
    /// Last slide.
    Last,
    /// Scroll the slide body up one line.
    ScrollUp,
    /// Scroll the slide body down one line.
    ScrollDown,
    /// Show or hide the key reference.
    ToggleHelp,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Show the slide this navigator points at.
    Slide(Navigator),
    /// The action was refused; position unchanged.
    Rejected { navigator: Navigator, error: DeckError },
    /// Scroll the slide body by this many lines.
    Scroll(i16),
    /// Flip the help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App positioned by `navigator`.
    pub fn new(navigator: Navigator) -> Self {
        App {
            navigator,
            show_help: false,
            notice: None,
            ascii_icons: false,
            scroll: 0,
            should_quit: false,
        }
    }

    /// Builder-style toggle for ASCII icons.
    pub fn with_ascii_icons(mut self, ascii: bool) -> Self {
        self.ascii_icons = ascii;
        self
    }

    /// Fold a transition into the model.
    ///
    /// Scrolling stops at the top; the effects layer clamps the bottom once
    /// it knows the rendered height.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Slide(navigator) => {
                if navigator.current() != self.navigator.current() {
                    self.scroll = 0;
                }
                self.navigator = navigator;
                self.notice = None;
            }
            Transition::Scroll(delta) => {
                self.scroll = self.scroll.saturating_add_signed(delta);
            }
            Transition::Rejected { navigator, error } => {
                self.navigator = navigator;
                self.notice = Some(error.to_string());
            }
            Transition::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Transition::Quit => {
                self.should_quit = true;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Navigator::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn app_starts_on_first_slide() {
        let app = App::default();
        assert_eq!(app.navigator.current(), 0);
        assert!(!app.show_help);
        assert!(app.notice.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn apply_slide_replaces_navigator_and_clears_notice() {
        let mut app = App::default();
        app.notice = Some("stale".into());
        let nav = Navigator::starting_at(Deck::standard(), 5).unwrap();

        app.apply(Transition::Slide(nav));
        assert_eq!(app.navigator.current(), 5);
        assert!(app.notice.is_none());
    }

    #[test]
    fn apply_rejected_keeps_position_and_sets_notice() {
        let mut app = App::new(Navigator::starting_at(Deck::standard(), 2).unwrap());
        let navigator = app.navigator;

        app.apply(Transition::Rejected {
            navigator,
            error: DeckError::InvalidArgument { index: 8, len: 7 },
        });
        assert_eq!(app.navigator.current(), 2);
        assert_eq!(app.notice.as_deref(), Some("Slide 9 does not exist (deck has 7 slides)"));
    }

    #[test]
    fn changing_slide_resets_scroll() {
        let mut app = App::default();
        app.scroll = 4;
        let mut nav = app.navigator;
        nav.advance();

        app.apply(Transition::Slide(nav));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn scroll_saturates_at_top() {
        let mut app = App::default();
        app.apply(Transition::Scroll(2));
        assert_eq!(app.scroll, 2);
        app.apply(Transition::Scroll(-5));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn apply_toggle_help_flips_flag() {
        let mut app = App::default();
        app.apply(Transition::ToggleHelp);
        assert!(app.show_help);
        app.apply(Transition::ToggleHelp);
        assert!(!app.show_help);
    }

    #[test]
    fn apply_quit_sets_flag() {
        let mut app = App::default();
        app.apply(Transition::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn action_equality_for_matching() {
        assert_eq!(Action::GoTo(1), Action::GoTo(1));
        assert_ne!(Action::GoTo(1), Action::GoTo(2));
        assert_ne!(Action::Next, Action::Prev);
    }
}
