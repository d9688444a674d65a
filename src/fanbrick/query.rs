//! # Query Engine
//!
//! Turns the full brick collection plus a [`QueryConfig`] into the ordered list
//! the wall and calendar show.
//!
//! Every active filter must pass (logical AND); a disabled filter lets every
//! brick through. Filters run first, then a single stable sort, so bricks that
//! compare equal keep their wall order.
//!
//! Optional fields never cause a failure: a missing emotion sorts as `""`,
//! missing tags match no tag filter, and `view_count` is zero unless some
//! outside collaborator has set it.

use crate::model::Brick;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    Emotion,
    Popularity,
    Favorites,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::DateDesc,
        SortOrder::DateAsc,
        SortOrder::Emotion,
        SortOrder::Popularity,
        SortOrder::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::Emotion => "emotion",
            SortOrder::Popularity => "popularity",
            SortOrder::Favorites => "favorites",
        }
    }

    /// Human label shown above a listing.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "Newest First",
            SortOrder::DateAsc => "Oldest First",
            SortOrder::Emotion => "By Emotion",
            SortOrder::Popularity => "Most Popular",
            SortOrder::Favorites => "Favorites First",
        }
    }

    fn compare(&self, a: &Brick, b: &Brick) -> Ordering {
        match self {
            SortOrder::DateDesc => b.created_at.cmp(&a.created_at),
            SortOrder::DateAsc => a.created_at.cmp(&b.created_at),
            SortOrder::Emotion => {
                let ea = a.emotion.as_deref().unwrap_or("");
                let eb = b.emotion.as_deref().unwrap_or("");
                ea.cmp(eb)
            }
            SortOrder::Popularity => b.view_count.cmp(&a.view_count),
            SortOrder::Favorites => b.is_favorite.cmp(&a.is_favorite),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("Unknown sort order: {}", s))
    }
}

/// Search text, facet selections, favorites flag and sort order.
///
/// `Default` disables every filter and sorts newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    pub search_text: String,
    pub emotion_filter: BTreeSet<String>,
    pub tag_filter: BTreeSet<String>,
    pub favorites_only: bool,
    pub sort_order: SortOrder,
}

impl QueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_emotions<I, T>(mut self, emotions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.emotion_filter = emotions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tag_filter = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn favorites_only(mut self, on: bool) -> Self {
        self.favorites_only = on;
        self
    }

    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Number of selected facet values plus one for favorites-only.
    pub fn active_filter_count(&self) -> usize {
        self.emotion_filter.len() + self.tag_filter.len() + usize::from(self.favorites_only)
    }

    fn search_needle(&self) -> Option<String> {
        if self.search_text.trim().is_empty() {
            None
        } else {
            Some(self.search_text.to_lowercase())
        }
    }

    fn matches(&self, brick: &Brick, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !matches_search(brick, needle) {
                return false;
            }
        }

        if !self.emotion_filter.is_empty() {
            match &brick.emotion {
                Some(emotion) if self.emotion_filter.contains(emotion) => {}
                _ => return false,
            }
        }

        if !self.tag_filter.is_empty() && !brick.tags.iter().any(|t| self.tag_filter.contains(t))
        {
            return false;
        }

        !self.favorites_only || brick.is_favorite
    }
}

/// `needle` must already be lowercased.
fn matches_search(brick: &Brick, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&brick.memory)
        || brick.ai_quote.as_deref().is_some_and(contains)
        || brick.club.as_ref().is_some_and(|c| contains(c.name()))
        || brick.tags.iter().any(|t| contains(t))
}

/// Filters and sorts `bricks` according to `config`.
///
/// Returns clones in the new order; the input is never modified.
pub fn query(bricks: &[Brick], config: &QueryConfig) -> Vec<Brick> {
    let needle = config.search_needle();

    let mut matched: Vec<Brick> = bricks
        .iter()
        .filter(|b| config.matches(b, needle.as_deref()))
        .cloned()
        .collect();

    // `sort_by` is stable: equal keys keep wall order.
    matched.sort_by(|a, b| config.sort_order.compare(a, b));
    matched
}
