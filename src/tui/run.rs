//! TUI effects boundary: event loop, terminal lifecycle, key/mouse mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: a reader thread forwards crossterm events into an mpsc
//! channel; the event loop consumes them, maps them to Actions and folds the
//! resulting Transitions into the App.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::{hit_test, max_scroll, render};

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Forward
        KeyCode::Right
        | KeyCode::PageDown
        | KeyCode::Char('l')
        | KeyCode::Char('n')
        | KeyCode::Char(' ') => Some(Action::Next),

        // Back
        KeyCode::Left
        | KeyCode::PageUp
        | KeyCode::Backspace
        | KeyCode::Char('h')
        | KeyCode::Char('p') => Some(Action::Prev),

        // Ends
        KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Last),

        // Scrolling long slides
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),

        // Number keys jump; 8 and 9 are past the deck and get rejected
        KeyCode::Char(c @ '1'..='9') => Some(Action::GoTo((c as u8 - b'1') as usize)),

        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

/// Map a mouse event to a semantic Action.
///
/// Left clicks are hit-tested against the layout of `frame_area`; the wheel
/// scrolls the slide body.
pub fn map_mouse(mouse: MouseEvent, app: &App, frame_area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(app, frame_area, mouse.column, mouse.row)
        }
        MouseEventKind::ScrollDown => Some(Action::ScrollDown),
        MouseEventKind::ScrollUp => Some(Action::ScrollUp),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// INPUT THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                // Windows reports both press and release; act on press only
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "terminal event read failed");
                    break;
                }
            };
            if tx.send(forwarded).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive presenter until the user quits.
pub fn run(mut app: App) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx);

    tracing::info!(
        slide = app.navigator.current_slide().id.key(),
        "presenter started"
    );

    let result = event_loop(&mut terminal, &mut app, &rx);

    restore_terminal()?;
    tracing::info!(
        slide = app.navigator.current_slide().id.key(),
        "presenter stopped"
    );
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    loop {
        let frame_area = terminal.draw(|frame| render(app, frame))?.area;

        if app.should_quit {
            return Ok(());
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => return Ok(()), // reader thread gone
        };

        let action = match event {
            AppEvent::Key(key) => map_key(key),
            AppEvent::Mouse(mouse) => map_mouse(mouse, app, frame_area),
            AppEvent::Resize => None,
        };

        if let Some(action) = action {
            dispatch(app, action, frame_area);
        }
    }
}

/// Run one action through the pure update and fold the result into the App.
///
/// `frame_area` is the size of the last drawn frame; scrolling is clamped to
/// what the slide needs at that size.
fn dispatch(app: &mut App, action: Action, frame_area: Rect) {
    let transition = update(app.navigator, &action);

    match &transition {
        Transition::Slide(nav) => {
            tracing::debug!(?action, from = app.navigator.current(), to = nav.current(), "navigate");
        }
        Transition::Rejected { error, .. } => {
            tracing::warn!(?action, %error, "navigation rejected");
        }
        _ => {}
    }

    app.apply(transition);
    app.scroll = app.scroll.min(max_scroll(app, frame_area));
}

// ============================================================================
// TESTS
// ============================================================================
