//! Slide registry and the Deck Navigator.
//!
//! Structure:
//! - Registry: the fixed, ordered slide table (documented invariant: non-empty)
//! - Navigator: owns the current position, transitions wrap around the ring
//! - Errors: the only failure is addressing a slide that doesn't exist
//!
//! All transitions are pure integer arithmetic. The navigator is `Copy` so the
//! TUI update function can take it by value and hand back a new one.

use crate::types::{Icon, SlideContent, SlideDescriptor, SlideId};

// ============================================================================
// REGISTRY
// ============================================================================

/// The business-plan deck, in presentation order.
pub static SLIDES: [SlideDescriptor; 7] = [
    SlideDescriptor { id: SlideId::Cover, title: "封面页", icon: Icon::Home },
    SlideDescriptor { id: SlideId::Intro, title: "项目介绍", icon: Icon::Target },
    SlideDescriptor { id: SlideId::Jtbd, title: "JTBD分析", icon: Icon::Users },
    SlideDescriptor { id: SlideId::UserMap, title: "用户故事地图", icon: Icon::MapPin },
    SlideDescriptor { id: SlideId::Kano, title: "卡诺模型分析", icon: Icon::TrendingUp },
    SlideDescriptor { id: SlideId::Metrics, title: "关键指标与成果", icon: Icon::BarChart },
    SlideDescriptor { id: SlideId::Summary, title: "总结与展望", icon: Icon::Star },
];

/// Deck title shown in the header.
pub const DECK_TITLE: &str = "商业计划书";

/// Deck subtitle shown next to the title.
pub const DECK_SUBTITLE: &str = "校园订餐案例";

/// Immutable, non-empty view of a slide registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    slides: &'static [SlideDescriptor],
}

/// Error addressing the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A deck needs at least one slide.
    EmptyDeck,

    /// Index outside `[0, len)`.
    InvalidArgument { index: usize, len: usize },

    /// No slide registered under this key.
    UnknownSlide(String),
}

impl Deck {
    /// Wrap a registry. Rejects an empty one.
    pub fn new(slides: &'static [SlideDescriptor]) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Deck { slides })
    }

    /// The built-in business-plan deck.
    pub fn standard() -> Self {
        Deck { slides: &SLIDES }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: construction rejects empty registries.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &'static [SlideDescriptor] {
        self.slides
    }

    pub fn get(&self, index: usize) -> Option<&'static SlideDescriptor> {
        self.slides.get(index)
    }

    /// Resolve a slide reference to a 0-based index.
    ///
    /// Accepts a 1-based ordinal ("3") or a slide key ("jtbd", any case).
    pub fn resolve(&self, reference: &str) -> Result<usize, DeckError> {
        let reference = reference.trim();

        if !reference.is_empty() && reference.bytes().all(|b| b.is_ascii_digit()) {
            // Too many digits for usize is still just a slide past the end.
            let ordinal = reference.parse::<usize>().unwrap_or(usize::MAX);
            return match ordinal.checked_sub(1) {
                Some(index) if index < self.len() => Ok(index),
                _ => Err(DeckError::InvalidArgument {
                    index: ordinal.wrapping_sub(1),
                    len: self.len(),
                }),
            };
        }

        let id = SlideId::from_key(reference)
            .ok_or_else(|| DeckError::UnknownSlide(reference.to_string()))?;
        self.slides
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DeckError::UnknownSlide(reference.to_string()))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::standard()
    }
}

// ============================================================================
// NAVIGATOR
// ============================================================================

/// Owns the current position in a deck.
///
/// Invariant: `current < deck.len()`. Only [`advance`](Self::advance),
/// [`retreat`](Self::retreat), [`jump_to`](Self::jump_to) and the
/// `first`/`last` shortcuts change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    deck: Deck,
    current: usize,
}

impl Navigator {
    /// Start at the first slide.
    pub fn new(deck: Deck) -> Self {
        Navigator { deck, current: 0 }
    }

    /// Start at a given slide, rejecting out-of-range indices.
    pub fn starting_at(deck: Deck, index: usize) -> Result<Self, DeckError> {
        let mut nav = Navigator::new(deck);
        nav.jump_to(index)?;
        Ok(nav)
    }

    pub fn deck(&self) -> Deck {
        self.deck
    }

    /// 0-based index of the current slide.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Move forward one slide, wrapping from last to first.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len();
    }

    /// Move back one slide, wrapping from first to last.
    pub fn retreat(&mut self) {
        let len = self.len();
        self.current = (self.current + len - 1) % len;
    }

    /// Jump directly to `index`. Out-of-range input leaves the position unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<(), DeckError> {
        if index >= self.len() {
            return Err(DeckError::InvalidArgument {
                index,
                len: self.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn first(&mut self) {
        self.current = 0;
    }

    pub fn last(&mut self) {
        self.current = self.len() - 1;
    }

    /// Descriptor of the current slide.
    pub fn current_slide(&self) -> &'static SlideDescriptor {
        &self.deck.slides[self.current]
    }

    /// Produce the current slide's content. No other slide is materialized.
    pub fn render(&self) -> SlideContent {
        self.current_slide().id.content()
    }

    /// `(current + 1) / len`, always in `(0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / self.len() as f64
    }

    /// Status readout, e.g. "3 / 7".
    pub fn status_text(&self) -> String {
        format!("{} / {}", self.current + 1, self.len())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(Deck::standard())
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::EmptyDeck => write!(f, "Deck has no slides"),
            DeckError::InvalidArgument { index, len } => {
                write!(
                    f,
                    "Slide {} does not exist (deck has {} slides)",
                    index.wrapping_add(1),
                    len
                )
            }
            DeckError::UnknownSlide(key) => write!(f, "Unknown slide: {}", key),
        }
    }
}

impl std::error::Error for DeckError {}

// ============================================================================
// TESTS
// ============================================================================
