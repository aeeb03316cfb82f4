//! Catalog of the news sources a reader can pick from.
//!
//! | Key | Label |
//! |-----|-------|
//! | `google-news` | Google News (default) |
//! | `bbc-news` | BBC News |
//! | `national-geographic` | National Geographic (has its own backdrop) |
//! | ... | see [`all`] |
//!
//! The fetcher never validates a source key; this catalog is for the caller
//! to warn about unknown keys and to label output.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Source used when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "google-news";

/// A news outlet recognized by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsSource {
    pub key: &'static str,
    pub label: &'static str,
}

const SOURCES: &[NewsSource] = &[
    NewsSource { key: "abc-news-au", label: "ABC News (AU)" },
    NewsSource { key: "al-jazeera-english", label: "Al Jazeera English" },
    NewsSource { key: "ars-technica", label: "Ars Technica" },
    NewsSource { key: "associated-press", label: "Associated Press" },
    NewsSource { key: "bbc-news", label: "BBC News" },
    NewsSource { key: "bloomberg", label: "Bloomberg" },
    NewsSource { key: "breitbart-news", label: "Breitbart News" },
    NewsSource { key: "business-insider", label: "Business Insider" },
    NewsSource { key: "daily-mail", label: "Daily Mail" },
    NewsSource { key: "engadget", label: "Engadget" },
    NewsSource { key: "entertainment-weekly", label: "Entertainment Weekly" },
    NewsSource { key: "financial-times", label: "Financial Times" },
    NewsSource { key: "fortune", label: "Fortune" },
    NewsSource { key: "four-four-two", label: "FourFourTwo" },
    NewsSource { key: "fox-sports", label: "Fox Sports" },
    NewsSource { key: "google-news", label: "Google News" },
    NewsSource { key: "ign", label: "IGN" },
    NewsSource { key: "mashable", label: "Mashable" },
    NewsSource { key: "metro", label: "Metro" },
    NewsSource { key: "mtv-news", label: "MTV News" },
    NewsSource { key: "national-geographic", label: "National Geographic" },
    NewsSource { key: "new-york-magazine", label: "New York Magazine" },
    NewsSource { key: "nfl-news", label: "NFL News" },
    NewsSource { key: "reuters", label: "Reuters" },
    NewsSource { key: "talksport", label: "TalkSport" },
    NewsSource { key: "techcrunch", label: "TechCrunch" },
    NewsSource { key: "techradar", label: "TechRadar" },
    NewsSource { key: "the-guardian-uk", label: "The Guardian (UK)" },
    NewsSource { key: "the-hindu", label: "The Hindu" },
    NewsSource { key: "the-lad-bible", label: "The Lad Bible" },
    NewsSource { key: "the-new-york-times", label: "The New York Times" },
    NewsSource { key: "the-wall-street-journal", label: "The Wall Street Journal" },
];

static BY_KEY: Lazy<HashMap<&'static str, &'static NewsSource>> =
    Lazy::new(|| SOURCES.iter().map(|s| (s.key, s)).collect());

/// Every known source, ordered by key.
pub fn all() -> &'static [NewsSource] {
    SOURCES
}

pub fn find(key: &str) -> Option<&'static NewsSource> {
    BY_KEY.get(key).copied()
}

/// Display label for `key`, if it is a known source.
pub fn label_for(key: &str) -> Option<&'static str> {
    find(key).map(|s| s.label)
}
