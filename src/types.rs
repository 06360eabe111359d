//! Domain types for pitch-deck.
//!
//! The slide registry vocabulary (ids, icons, descriptors) and the static
//! content model every view producer returns. Pure data, no rendering.

use serde::Serialize;

// ============================================================================
// SLIDE IDENTITY
// ============================================================================

/// Stable key of a slide. One variant per registered slide, in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideId {
    Cover,
    Intro,
    Jtbd,
    UserMap,
    Kano,
    Metrics,
    Summary,
}

impl SlideId {
    /// Every id, in presentation order.
    pub const ALL: [SlideId; 7] = [
        SlideId::Cover,
        SlideId::Intro,
        SlideId::Jtbd,
        SlideId::UserMap,
        SlideId::Kano,
        SlideId::Metrics,
        SlideId::Summary,
    ];

    /// The key used on the command line and in config files.
    pub fn key(self) -> &'static str {
        match self {
            SlideId::Cover => "cover",
            SlideId::Intro => "intro",
            SlideId::Jtbd => "jtbd",
            SlideId::UserMap => "usermap",
            SlideId::Kano => "kano",
            SlideId::Metrics => "metrics",
            SlideId::Summary => "summary",
        }
    }

    /// Case-insensitive lookup by key.
    pub fn from_key(key: &str) -> Option<SlideId> {
        SlideId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(key))
    }
}

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Pictogram shown beside slide titles, section titles and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Home,
    Target,
    Users,
    MapPin,
    TrendingUp,
    BarChart,
    Star,
    ArrowUp,
    ArrowDown,
    AlertTriangle,
    RotateCcw,
}

impl Icon {
    /// Single-column unicode glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Target => "◎",
            Icon::Users => "☺",
            Icon::MapPin => "⚲",
            Icon::TrendingUp => "↗",
            Icon::BarChart => "▥",
            Icon::Star => "★",
            Icon::ArrowUp => "↑",
            Icon::ArrowDown => "↓",
            Icon::AlertTriangle => "⚠",
            Icon::RotateCcw => "↺",
        }
    }

    /// Fallback for terminals without good unicode coverage.
    pub fn ascii(self) -> &'static str {
        match self {
            Icon::Home => "H",
            Icon::Target => "o",
            Icon::Users => "U",
            Icon::MapPin => "@",
            Icon::TrendingUp => "^",
            Icon::BarChart => "#",
            Icon::Star => "*",
            Icon::ArrowUp => "+",
            Icon::ArrowDown => "-",
            Icon::AlertTriangle => "!",
            Icon::RotateCcw => "~",
        }
    }

    /// `ascii()` when `ascii` is set, otherwise `glyph()`.
    pub fn symbol(self, ascii: bool) -> &'static str {
        if ascii { self.ascii() } else { self.glyph() }
    }
}

/// Registry entry: identity, display title and icon of one slide.
///
/// The view producer is reached through [`SlideId::content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideDescriptor {
    pub id: SlideId,
    pub title: &'static str,
    pub icon: Icon,
}

// ============================================================================
// CONTENT MODEL
// ============================================================================

/// Colour family of a section. Mapped to terminal styles by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Red,
    Yellow,
    Orange,
    Neutral,
}

/// Everything a single slide displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideContent {
    /// Large heading at the top of the slide.
    pub heading: &'static str,
    /// Optional line under the heading.
    pub tagline: Option<&'static str>,
    pub sections: Vec<Section>,
    /// Optional closing banner (e.g. "thanks for watching").
    pub banner: Option<&'static str>,
}

/// A titled block within a slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    /// Small secondary label beside the title.
    pub caption: Option<&'static str>,
    /// Pictogram before the title; sections without one get a plain bullet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub accent: Accent,
    pub body: Body,
}

/// Section payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum Body {
    /// A single paragraph.
    Text(&'static str),
    /// Bulleted list.
    Bullets(Vec<&'static str>),
    /// Label / highlighted value rows.
    Stats(Vec<Stat>),
    /// Numbered steps, each with an emoji marker and description.
    Steps(Vec<Step>),
    /// Small cards laid out side by side.
    Cards(Vec<Card>),
}

/// A labelled figure, e.g. "用户留存率 ≥ 40%".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    /// Highlighted part (number or comparator).
    pub value: &'static str,
    /// Trailing unit or qualifier.
    pub unit: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub marker: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
    pub accent: Accent,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_lookup() {
        for id in SlideId::ALL {
            assert_eq!(SlideId::from_key(id.key()), Some(id));
        }
    }

    #[test]
    fn key_lookup_ignores_case() {
        assert_eq!(SlideId::from_key("KANO"), Some(SlideId::Kano));
        assert_eq!(SlideId::from_key("UserMap"), Some(SlideId::UserMap));
        assert_eq!(SlideId::from_key("appendix"), None);
    }

    #[test]
    fn ascii_icons_are_single_ascii_chars() {
        let icons = [
            Icon::Home,
            Icon::Target,
            Icon::Users,
            Icon::MapPin,
            Icon::TrendingUp,
            Icon::BarChart,
            Icon::Star,
            Icon::ArrowUp,
            Icon::ArrowDown,
            Icon::AlertTriangle,
            Icon::RotateCcw,
        ];
        for icon in icons {
            assert_eq!(icon.ascii().len(), 1);
            assert!(icon.ascii().is_ascii());
            assert_eq!(icon.glyph().chars().count(), 1);
        }
    }

    #[test]
    fn symbol_follows_ascii_flag() {
        assert_eq!(Icon::RotateCcw.symbol(false), "↺");
        assert_eq!(Icon::RotateCcw.symbol(true), "~");
        assert_eq!(Icon::Home.symbol(true), Icon::Home.ascii());
    }

    #[test]
    fn slide_id_serializes_as_key() {
        let json = serde_json::to_string(&SlideId::UserMap).unwrap();
        assert_eq!(json, "\"usermap\"");
    }

    #[test]
    fn body_serializes_with_kind_tag() {
        let body = Body::Text("hello");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["items"], "hello");
    }
}
