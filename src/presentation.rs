//! Turning fetched [`Article`]s into what a reader sees.
//!
//! Relative publish times ("5 minutes ago"), ranked titles, the backdrop
//! image for a source, and whether an article can be opened at all. All of
//! these treat [`NULL_SENTINEL`](crate::models::NULL_SENTINEL) as "missing".

use crate::models::{Article, is_present};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Shown in place of a title the API did not send.
pub const VOID_TITLE: &str = "<VOID>";

/// Source whose headlines always use the outlet's logo as backdrop.
const BRAND_BACKDROP_SOURCE: &str = "national-geographic";

/// Parse an API publish time into UTC.
///
/// Accepts RFC 3339 (with or without fractional seconds) and the bare
/// `yyyy-MM-ddTHH:mm:ss` form, which is taken to be UTC.
pub fn parse_published_at(published_at: &str) -> Option<DateTime<Utc>> {
    if !is_present(published_at) {
        return None;
    }
    let s = published_at.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Describe how long before `now` an article was published.
///
/// Returns `None` when the time is missing, unparseable, or in the future
/// (the API occasionally reports times ahead of the clock; those are hidden).
pub fn relative_time(published_at: &str, now: DateTime<Utc>) -> Option<String> {
    let published = parse_published_at(published_at)?;
    let elapsed = now.signed_duration_since(published);
    if elapsed < chrono::Duration::zero() {
        return None;
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    let text = if minutes == 0 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        plural(days, "day")
    } else {
        published.format("%b %-d, %Y").to_string()
    };
    Some(text)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Title prefixed with its 1-based rank, e.g. `"1. Headline"`.
pub fn ranked_title(position: usize, article: &Article) -> String {
    let title = if is_present(&article.title) {
        article.title.as_str()
    } else {
        VOID_TITLE
    };
    format!("{}. {}", position + 1, title)
}

/// The link to open for an article, if the API sent one.
pub fn preview_url(article: &Article) -> Option<&str> {
    is_present(&article.url).then_some(article.url.as_str())
}

/// Header image to show above a source's headlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop<'a> {
    /// Image URL taken from one of the articles.
    Image(&'a str),
    /// The outlet's own logo.
    BrandLogo,
    None,
}

/// Choose the backdrop: the first article image that looks like a web URL.
pub fn backdrop<'a>(source: &str, articles: &'a [Article]) -> Backdrop<'a> {
    if source == BRAND_BACKDROP_SOURCE {
        return Backdrop::BrandLogo;
    }
    articles
        .iter()
        .map(|a| a.url_to_image.as_str())
        .find(|u| u.contains("http"))
        .map_or(Backdrop::None, Backdrop::Image)
}
