//! Pure rendering: map App state to ratatui widget trees.
//!
//! Screen layout, top to bottom:
//! - title row: deck title and subtitle, status readout on the right
//! - tab row: one tab per slide, the current one highlighted
//! - content: `‹` gutter, slide body, `›` gutter
//! - help row: key hints, help overlay or rejected-action notice
//! - progress row: bar filled to the navigator's progress fraction
//!
//! Widget-building functions are pure (state in, widgets out). The same
//! layout functions drive mouse hit-testing so clicks land where things are
//! drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::deck::{DECK_SUBTITLE, DECK_TITLE, Navigator};
use crate::types::{Body, Section, SlideContent, SlideDescriptor};

use super::state::{Action, App};
use super::theme;

/// Width of each arrow gutter beside the slide body.
pub const GUTTER_WIDTH: u16 = 3;

/// Columns reserved for the "n / N" readout.
const STATUS_WIDTH: u16 = 10;

/// Gap between tabs in the navigation bar.
const TAB_GAP: &str = " ";

// ============================================================================
// LAYOUT
// ============================================================================

/// Screen regions, derived from the frame size alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub title: Rect,
    pub tabs: Rect,
    pub prev_gutter: Rect,
    pub body: Rect,
    pub next_gutter: Rect,
    pub help: Rect,
    pub progress: Rect,
}

/// Split the frame into its regions.
pub fn layout(area: Rect) -> Areas {
    let rows = Layout::vertical([
        Constraint::Length(1), // title + status
        Constraint::Length(1), // tabs
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
        Constraint::Length(1), // progress
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Length(GUTTER_WIDTH),
        Constraint::Min(0),
        Constraint::Length(GUTTER_WIDTH),
    ])
    .split(rows[2]);

    Areas {
        title: rows[0],
        tabs: rows[1],
        prev_gutter: columns[0],
        body: columns[1],
        next_gutter: columns[2],
        help: rows[3],
        progress: rows[4],
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole deck view to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let areas = layout(frame.area());
    let nav = &app.navigator;

    let status = render_status(nav);
    let [title_area, status_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(STATUS_WIDTH),
    ])
    .areas(areas.title);
    frame.render_widget(render_title(), title_area);
    frame.render_widget(status, status_area);
    frame.render_widget(
        Paragraph::new(Line::from(tab_spans(nav, app.ascii_icons, areas.tabs.width))),
        areas.tabs,
    );

    render_arrow("‹", frame, areas.prev_gutter);
    render_arrow("›", frame, areas.next_gutter);

    // Only the current slide's producer runs.
    let body = slide_body(app);
    let scroll = app.scroll.min(scroll_limit(&body, areas.body));
    frame.render_widget(body.scroll((scroll, 0)), areas.body);

    frame.render_widget(render_help(app), areas.help);
    frame.render_widget(render_progress(nav, areas.progress.width), areas.progress);
}

// ============================================================================
// HEADER
// ============================================================================

/// Title row: deck name and subtitle.
fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(DECK_TITLE, theme::STYLE_TITLE),
        Span::raw("  "),
        Span::styled(DECK_SUBTITLE, theme::STYLE_SUBTITLE),
    ]))
}

/// Status readout "n / N", right-aligned.
fn render_status(nav: &Navigator) -> Paragraph<'static> {
    Paragraph::new(Span::styled(format!("{} ", nav.status_text()), theme::STYLE_DIM))
        .alignment(Alignment::Right)
}

/// How much of each tab label is drawn, widest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TabDensity {
    /// " icon title " on every tab.
    Full,
    /// Title on the active tab, " icon n " on the rest.
    ActiveTitle,
    /// " icon n " on every tab.
    Compact,
    /// " n " on every tab.
    Ordinal,
    /// Bare "n". Seven of these plus gaps need 13 columns.
    Bare,
}

impl TabDensity {
    const ALL: [TabDensity; 5] = [
        TabDensity::Full,
        TabDensity::ActiveTitle,
        TabDensity::Compact,
        TabDensity::Ordinal,
        TabDensity::Bare,
    ];
}

fn tab_label(
    density: TabDensity,
    slide: &SlideDescriptor,
    position: usize,
    active: bool,
    ascii: bool,
) -> String {
    let icon = slide.icon.symbol(ascii);
    match density {
        TabDensity::Full => format!(" {} {} ", icon, slide.title),
        TabDensity::ActiveTitle if active => format!(" {} {} ", icon, slide.title),
        TabDensity::ActiveTitle | TabDensity::Compact => format!(" {}{} ", icon, position + 1),
        TabDensity::Ordinal => format!(" {} ", position + 1),
        TabDensity::Bare => (position + 1).to_string(),
    }
}

/// Columns a row of `labels` occupies, gaps included.
fn row_width(labels: &[String]) -> usize {
    labels.iter().map(|l| Span::raw(l.as_str()).width()).sum::<usize>()
        + TAB_GAP.len() * labels.len().saturating_sub(1)
}

/// Tab labels for the current width.
///
/// Picks the widest density whose row fits: titles everywhere, then a title
/// only on the active tab, then icons and ordinals, then ordinals alone. Below
/// the bare-ordinal width the row is clipped.
pub fn tab_labels(nav: &Navigator, ascii: bool, width: u16) -> Vec<String> {
    let slides = nav.deck().slides();
    let mut labels = Vec::new();

    for density in TabDensity::ALL {
        labels = slides
            .iter()
            .enumerate()
            .map(|(i, s)| tab_label(density, s, i, i == nav.current(), ascii))
            .collect();
        if row_width(&labels) <= width as usize {
            break;
        }
    }
    labels
}

/// Styled spans of the tab bar.
fn tab_spans(nav: &Navigator, ascii: bool, width: u16) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, label) in tab_labels(nav, ascii, width).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(TAB_GAP));
        }
        let style = if i == nav.current() {
            theme::STYLE_TAB_ACTIVE
        } else {
            theme::STYLE_TAB
        };
        spans.push(Span::styled(label, style));
    }
    spans
}

/// Column ranges `[start, end)` of each tab, relative to the tab row.
pub fn tab_ranges(nav: &Navigator, ascii: bool, width: u16) -> Vec<(u16, u16)> {
    let mut ranges = Vec::new();
    let mut x: usize = 0;
    for (i, label) in tab_labels(nav, ascii, width).iter().enumerate() {
        if i > 0 {
            x += TAB_GAP.len();
        }
        let w = Span::raw(label.as_str()).width();
        ranges.push((x as u16, (x + w) as u16));
        x += w;
    }
    ranges
}

// ============================================================================
// CONTENT
// ============================================================================

fn render_arrow(symbol: &'static str, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let mid = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let arrow = Paragraph::new(Span::styled(symbol, theme::STYLE_INTERACTIVE))
        .alignment(Alignment::Center);
    frame.render_widget(arrow, mid);
}

/// The current slide's body, wrapped to the body area and not yet scrolled.
fn slide_body(app: &App) -> Paragraph<'static> {
    Paragraph::new(slide_lines(&app.navigator.render(), app.ascii_icons))
        .wrap(Wrap { trim: false })
}

/// Lay out a slide's content as styled lines.
pub fn slide_lines(content: &SlideContent, ascii: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(content.heading, theme::STYLE_HEADING)).centered(),
    ];

    if let Some(tagline) = content.tagline {
        lines.push(Line::from(Span::styled(tagline, theme::STYLE_SUBTITLE)).centered());
    }

    for section in &content.sections {
        lines.push(Line::from(""));

        let marker = match section.icon {
            Some(icon) => format!("{} ", icon.symbol(ascii)),
            None => "● ".to_string(),
        };
        let mut title = vec![
            Span::styled(marker, theme::accent_style(section.accent)),
            Span::styled(section.title, theme::STYLE_SECTION),
        ];
        if let Some(caption) = section.caption {
            title.push(Span::raw("  "));
            title.push(Span::styled(caption, theme::accent_style(section.accent)));
        }
        lines.push(Line::from(title));

        push_body(&mut lines, section, ascii);
    }

    if let Some(banner) = content.banner {
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(format!(" ★ {} ★ ", banner), theme::STYLE_BANNER)).centered(),
        );
    }

    lines
}

fn push_body(lines: &mut Vec<Line<'static>>, section: &Section, ascii: bool) {
    let accent = theme::accent_style(section.accent);

    match &section.body {
        Body::Text(text) => {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(*text, theme::STYLE_BODY),
            ]));
        }
        Body::Bullets(items) => {
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled("  • ", accent),
                    Span::styled(*item, theme::STYLE_BODY),
                ]));
            }
        }
        Body::Stats(stats) => {
            for stat in stats {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(stat.label, theme::STYLE_BODY),
                    Span::raw("  "),
                    Span::styled(
                        stat.value,
                        theme::accent_style(stat.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(stat.unit, theme::STYLE_BODY),
                ]));
            }
        }
        Body::Steps(steps) => {
            for (i, step) in steps.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:>2}. ", i + 1), accent),
                    Span::raw(step.marker),
                    Span::raw(" "),
                    Span::styled(step.title, theme::STYLE_SECTION),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("      {}", step.description),
                    theme::STYLE_DIM,
                )));
            }
        }
        Body::Cards(cards) => {
            for card in cards {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(card.icon.symbol(ascii), theme::accent_style(card.accent)),
                    Span::raw(" "),
                    Span::styled(card.title, theme::STYLE_SECTION),
                    Span::styled("  ", theme::STYLE_DIM),
                    Span::styled(card.text, theme::STYLE_DIM),
                ]));
            }
        }
    }
}

/// Largest useful scroll offset for the current slide in `frame_area`.
///
/// Counts wrapped rows, so the last line of the slide lands on the bottom
/// row of the body area.
pub fn max_scroll(app: &App, frame_area: Rect) -> u16 {
    scroll_limit(&slide_body(app), layout(frame_area).body)
}

fn scroll_limit(body: &Paragraph, area: Rect) -> u16 {
    let rows = u16::try_from(body.line_count(area.width)).unwrap_or(u16::MAX);
    rows.saturating_sub(area.height)
}

// ============================================================================
// FOOTER
// ============================================================================

/// Help line: notice, key reference or the short hint.
fn render_help(app: &App) -> Paragraph<'static> {
    if let Some(notice) = &app.notice {
        return Paragraph::new(Span::styled(format!(" ⚠ {}", notice), theme::STYLE_WARNING));
    }

    let text = if app.show_help {
        " [←/h] prev  [→/l/Space] next  [1-7] jump  [g/G] first/last  [↑/↓] scroll  [?] close  [q] quit"
    } else {
        " [←/→] navigate  [1-7] jump  [?] keys  [q] quit"
    };
    Paragraph::new(Span::styled(text, theme::STYLE_HELP))
}

/// Number of filled cells for a progress bar of `width`.
pub fn progress_cells(fraction: f64, width: u16) -> u16 {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as u16;
    filled.min(width)
}

/// Progress bar: blue fill over the left half of the row, purple over the
/// right half, then the track.
fn render_progress(nav: &Navigator, width: u16) -> Paragraph<'static> {
    let filled = progress_cells(nav.progress_fraction(), width);
    let blue = filled.min(width.div_ceil(2));
    let purple = filled - blue;
    let empty = width - filled;
    Paragraph::new(Line::from(vec![
        Span::styled("█".repeat(blue as usize), theme::STYLE_PROGRESS),
        Span::styled("█".repeat(purple as usize), theme::STYLE_PROGRESS_END),
        Span::styled("░".repeat(empty as usize), theme::STYLE_PROGRESS_TRACK),
    ]))
}

// ============================================================================
// HIT TESTING
// ============================================================================

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Map a click at (`column`, `row`) to the action of whatever is drawn there.
pub fn hit_test(app: &App, frame_area: Rect, column: u16, row: u16) -> Option<Action> {
    let areas = layout(frame_area);

    if contains(areas.tabs, column, row) {
        let x = column - areas.tabs.x;
        return tab_ranges(&app.navigator, app.ascii_icons, areas.tabs.width)
            .iter()
            .position(|&(start, end)| x >= start && x < end)
            .map(Action::GoTo);
    }
    if contains(areas.prev_gutter, column, row) {
        return Some(Action::Prev);
    }
    if contains(areas.next_gutter, column, row) {
        return Some(Action::Next);
    }
    None
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::types::SlideId;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn make_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn app_at(index: usize) -> App {
        App::new(Navigator::starting_at(Deck::standard(), index).unwrap())
    }

    /// Buffer text with whitespace removed, so wide-glyph padding cells
    /// don't split words.
    fn compact_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect::<String>()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn every_slide_renders_without_panic() {
        let mut terminal = make_terminal(120, 40);
        for i in 0..7 {
            let app = app_at(i);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every slide should render without panic");
        }
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let mut terminal = make_terminal(10, 3);
        let app = app_at(3);
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    #[test]
    fn status_readout_tracks_navigator() {
        let mut terminal = make_terminal(120, 30);
        let app = app_at(2);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(row_text(&terminal, 0).contains("3 / 7"));
    }

    #[test]
    fn current_slide_heading_is_drawn() {
        let mut terminal = make_terminal(120, 40);
        let app = app_at(4);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let text = compact_text(&terminal);
        assert!(text.contains("基本型需求（必备）"));
        assert!(!text.contains("感谢观看"), "other slides must not be drawn");
    }

    #[test]
    fn summary_draws_banner() {
        let mut terminal = make_terminal(120, 40);
        let app = app_at(6);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(compact_text(&terminal).contains("感谢观看"));
    }

    #[test]
    fn notice_replaces_help_hint() {
        let mut terminal = make_terminal(80, 20);
        let mut app = app_at(0);
        app.notice = Some("Slide 9 does not exist (deck has 7 slides)".into());
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(row_text(&terminal, 18).contains("Slide 9 does not exist"));
    }

    #[test]
    fn help_overlay_lists_scroll_keys() {
        let mut terminal = make_terminal(120, 20);
        let mut app = app_at(0);
        app.show_help = true;
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(row_text(&terminal, 18).contains("scroll"));
    }

    #[test]
    fn progress_row_fill_matches_fraction() {
        let mut terminal = make_terminal(70, 20);
        let app = app_at(2);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let row = row_text(&terminal, 19);
        assert_eq!(row.chars().filter(|&c| c == '█').count(), 30);
        assert_eq!(row.chars().filter(|&c| c == '░').count(), 40);
    }

    #[test]
    fn progress_fill_turns_purple_past_halfway() {
        let mut terminal = make_terminal(70, 20);
        let app = app_at(6);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 19)].fg, Color::LightBlue);
        assert_eq!(buffer[(34, 19)].fg, Color::LightBlue);
        assert_eq!(buffer[(35, 19)].fg, Color::LightMagenta);
        assert_eq!(buffer[(69, 19)].fg, Color::LightMagenta);

        let early = app_at(2);
        terminal.draw(|frame| render(&early, frame)).unwrap();
        assert_eq!(terminal.backend().buffer()[(29, 19)].fg, Color::LightBlue);
    }

    #[test]
    fn progress_cells_hit_the_ends() {
        assert_eq!(progress_cells(1.0 / 7.0, 70), 10);
        assert_eq!(progress_cells(1.0, 70), 70);
        assert_eq!(progress_cells(1.0, 0), 0);
        assert_eq!(progress_cells(2.0, 10), 10);
    }

    #[test]
    fn wide_terminal_shows_every_title() {
        let nav = Navigator::default();
        let labels = tab_labels(&nav, false, 200);
        for (label, slide) in labels.iter().zip(nav.deck().slides()) {
            assert!(label.contains(slide.title));
        }
    }

    #[test]
    fn narrow_terminal_collapses_inactive_tabs() {
        let nav = Navigator::starting_at(Deck::standard(), 1).unwrap();
        let labels = tab_labels(&nav, true, 50);
        assert_eq!(labels[0], " H1 ");
        assert!(labels[1].contains("项目介绍"));
        assert_eq!(labels[6], " *7 ");
    }

    #[test]
    fn tabs_drop_the_active_title_before_clipping() {
        let nav = Navigator::starting_at(Deck::standard(), 4).unwrap();
        let labels = tab_labels(&nav, false, 40);
        assert_eq!(labels[4], " ↗5 ");
        assert_eq!(labels[6], " ★7 ");
    }

    #[test]
    fn very_narrow_terminal_falls_back_to_ordinals() {
        let nav = Navigator::default();
        assert_eq!(tab_labels(&nav, false, 27)[0], " 1 ");
        assert_eq!(tab_labels(&nav, false, 13), vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn every_tab_stays_on_screen_down_to_thirteen_columns() {
        for current in 0..7 {
            let nav = Navigator::starting_at(Deck::standard(), current).unwrap();
            for ascii in [false, true] {
                for width in 13..=160 {
                    let ranges = tab_ranges(&nav, ascii, width);
                    assert_eq!(ranges.len(), 7);
                    for (i, &(start, end)) in ranges.iter().enumerate() {
                        assert!(start < end, "tab {} empty at width {}", i + 1, width);
                        assert!(end <= width, "tab {} off screen at width {}", i + 1, width);
                    }
                }
            }
        }
    }

    #[test]
    fn clicking_last_tab_works_on_narrow_terminal() {
        let app = app_at(4);
        let frame = Rect::new(0, 0, 40, 20);
        let tabs_row = layout(frame).tabs.y;
        let (start, _) = tab_ranges(&app.navigator, false, 40)[6];
        assert_eq!(hit_test(&app, frame, start, tabs_row), Some(Action::GoTo(6)));
    }

    #[test]
    fn tab_ranges_are_contiguous_with_gaps() {
        let nav = Navigator::default();
        let ranges = tab_ranges(&nav, false, 200);
        assert_eq!(ranges.len(), 7);
        assert_eq!(ranges[0].0, 0);
        for pair in ranges.windows(2) {
            assert_eq!(pair[1].0, pair[0].1 + 1);
        }
    }

    #[test]
    fn clicking_each_tab_jumps_to_it() {
        let app = app_at(0);
        let frame = Rect::new(0, 0, 200, 30);
        let tabs_row = layout(frame).tabs.y;

        for (i, (start, end)) in tab_ranges(&app.navigator, false, 200).into_iter().enumerate() {
            assert_eq!(hit_test(&app, frame, start, tabs_row), Some(Action::GoTo(i)));
            assert_eq!(hit_test(&app, frame, end - 1, tabs_row), Some(Action::GoTo(i)));
        }
    }

    #[test]
    fn clicking_gap_between_tabs_does_nothing() {
        let app = app_at(0);
        let frame = Rect::new(0, 0, 200, 30);
        let tabs_row = layout(frame).tabs.y;
        let (_, end) = tab_ranges(&app.navigator, false, 200)[0];
        assert_eq!(hit_test(&app, frame, end, tabs_row), None);
    }

    #[test]
    fn clicking_gutters_navigates() {
        let app = app_at(3);
        let frame = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test(&app, frame, 0, 10), Some(Action::Prev));
        assert_eq!(hit_test(&app, frame, 79, 10), Some(Action::Next));
        assert_eq!(hit_test(&app, frame, 40, 10), None);
        assert_eq!(hit_test(&app, frame, 40, 0), None);
    }

    #[test]
    fn max_scroll_depends_on_slide_length() {
        let frame = Rect::new(0, 0, 120, 20);
        let short = max_scroll(&app_at(4), frame);
        let long = max_scroll(&app_at(3), frame);
        assert!(long > short);
    }

    #[test]
    fn max_scroll_counts_wrapped_rows() {
        let app = app_at(3);
        let logical = slide_lines(&app.navigator.render(), false).len() as u16;
        let narrow = Rect::new(0, 0, 40, 20);
        let body = layout(narrow).body;

        assert!(max_scroll(&app, narrow) > logical - body.height);
        assert!(max_scroll(&app, narrow) > max_scroll(&app, Rect::new(0, 0, 160, 20)));
    }

    #[test]
    fn short_slide_on_tall_terminal_does_not_scroll() {
        assert_eq!(max_scroll(&app_at(4), Rect::new(0, 0, 120, 40)), 0);
    }

    #[test]
    fn render_clamps_stale_scroll_offset() {
        let mut terminal = make_terminal(120, 40);
        let mut app = app_at(4);
        app.scroll = 500;
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(compact_text(&terminal).contains("基本型需求（必备）"));
    }

    #[test]
    fn ascii_icons_reach_section_and_card_markers() {
        let mut terminal = make_terminal(120, 40);
        let app = app_at(2).with_ascii_icons(true);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let text = compact_text(&terminal);
        assert!(text.contains("+推力Push"));
        assert!(text.contains("~惯性Habit"));
        assert!(!text.contains('↺'));

        let lines = slide_lines(&SlideId::Cover.content(), true);
        let cover: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(cover.contains("o 需求分析"));
        assert!(!cover.contains('◎'));
    }

    #[test]
    fn forces_show_their_own_icons() {
        let mut terminal = make_terminal(120, 40);
        let app = app_at(2);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let text = compact_text(&terminal);
        assert!(text.contains("↑推力Push"));
        assert!(text.contains("↓拉力Pull"));
        assert!(text.contains("⚠焦虑Anxiety"));
        assert!(text.contains("↺惯性Habit"));
    }
}
