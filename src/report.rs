//! Plain-text and JSON output for the non-interactive commands.
//!
//! Pure functions: (deck data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::deck::{DECK_SUBTITLE, DECK_TITLE, Deck};
use crate::types::{Body, OutputFormat, SlideContent, SlideDescriptor};

/// Format the deck outline, marking the slide at `current`.
///
/// `ascii_icons` swaps every pictogram for its ASCII fallback.
pub fn format_outline(
    deck: &Deck,
    current: usize,
    format: OutputFormat,
    ascii_icons: bool,
) -> String {
    match format {
        OutputFormat::Human => outline_human(deck, current, ascii_icons),
        OutputFormat::Json => outline_json(deck, current),
    }
}

/// Format a single slide.
///
/// `position` is 0-based; `len` is the deck length.
pub fn format_slide(
    slide: &SlideDescriptor,
    content: &SlideContent,
    position: usize,
    len: usize,
    format: OutputFormat,
    ascii_icons: bool,
) -> String {
    match format {
        OutputFormat::Human => slide_human(slide, content, position, len, ascii_icons),
        OutputFormat::Json => slide_json(slide, content, position, len),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn outline_human(deck: &Deck, current: usize, ascii: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} · {} ===\n", DECK_TITLE, DECK_SUBTITLE));

    for (i, slide) in deck.slides().iter().enumerate() {
        let marker = if i == current { ">" } else { " " };
        out.push_str(&format!(
            "{} {:>2}. {} {:<8} {}\n",
            marker,
            i + 1,
            slide.icon.symbol(ascii),
            slide.id.key(),
            slide.title
        ));
    }

    out.push_str(&format!("\n{} slides\n", deck.len()));
    out
}

fn slide_human(
    slide: &SlideDescriptor,
    content: &SlideContent,
    position: usize,
    len: usize,
    ascii: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "[{} / {}] {} ({})\n",
        position + 1,
        len,
        slide.title,
        slide.id.key()
    ));
    out.push_str(&format!("\n{}\n", content.heading));
    if let Some(tagline) = content.tagline {
        out.push_str(&format!("{}\n", tagline));
    }

    for section in &content.sections {
        out.push('\n');
        let title = match section.icon {
            Some(icon) => format!("{} {}", icon.symbol(ascii), section.title),
            None => section.title.to_string(),
        };
        match section.caption {
            Some(caption) => out.push_str(&format!("== {} ({}) ==\n", title, caption)),
            None => out.push_str(&format!("== {} ==\n", title)),
        }
        push_body(&mut out, &section.body, ascii);
    }

    if let Some(banner) = content.banner {
        out.push_str(&format!("\n★ {} ★\n", banner));
    }

    out
}

fn push_body(out: &mut String, body: &Body, ascii: bool) {
    match body {
        Body::Text(text) => out.push_str(&format!("  {}\n", text)),
        Body::Bullets(items) => {
            for item in items {
                out.push_str(&format!("  • {}\n", item));
            }
        }
        Body::Stats(stats) => {
            for stat in stats {
                out.push_str(&format!("  {}: {} {}\n", stat.label, stat.value, stat.unit));
            }
        }
        Body::Steps(steps) => {
            for (i, step) in steps.iter().enumerate() {
                out.push_str(&format!("  {}. {} {}\n", i + 1, step.marker, step.title));
                out.push_str(&format!("     {}\n", step.description));
            }
        }
        Body::Cards(cards) => {
            for card in cards {
                out.push_str(&format!(
                    "  {} {}: {}\n",
                    card.icon.symbol(ascii),
                    card.title,
                    card.text
                ));
            }
        }
    }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct OutlineEntry<'a> {
    position: usize,
    #[serde(flatten)]
    slide: &'a SlideDescriptor,
    current: bool,
}

#[derive(Serialize)]
struct SlideDocument<'a> {
    position: usize,
    total: usize,
    #[serde(flatten)]
    slide: &'a SlideDescriptor,
    content: &'a SlideContent,
}

fn outline_json(deck: &Deck, current: usize) -> String {
    let entries: Vec<OutlineEntry> = deck
        .slides()
        .iter()
        .enumerate()
        .map(|(i, slide)| OutlineEntry {
            position: i + 1,
            slide,
            current: i == current,
        })
        .collect();

    serde_json::to_string_pretty(&entries).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn slide_json(
    slide: &SlideDescriptor,
    content: &SlideContent,
    position: usize,
    len: usize,
) -> String {
    let doc = SlideDocument {
        position: position + 1,
        total: len,
        slide,
        content,
    };

    serde_json::to_string_pretty(&doc).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// ============================================================================
// TESTS
// ============================================================================
