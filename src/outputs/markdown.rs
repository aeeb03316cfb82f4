//! Markdown rendering of a source's headlines.
//!
//! Produces a ranked list with relative publish times and links, headed by
//! the source label and its backdrop image.

use crate::models::HeadlinesSnapshot;
use crate::presentation::{Backdrop, backdrop, preview_url, ranked_title, relative_time};
use chrono::{DateTime, Utc};
use std::fmt::Write;
use std::path::PathBuf;

/// File name for a snapshot: `{date}_{source}.md`.
pub fn markdown_filename(snapshot: &HeadlinesSnapshot) -> String {
    format!("{}_{}.md", snapshot.local_date, snapshot.source)
}

pub fn markdown_path(snapshot: &HeadlinesSnapshot, markdown_output_dir: &str) -> PathBuf {
    PathBuf::from(markdown_output_dir).join(markdown_filename(snapshot))
}

/// Render `snapshot` as Markdown, with publish times relative to `now`.
pub fn headlines_to_markdown(snapshot: &HeadlinesSnapshot, now: DateTime<Utc>) -> String {
    let mut md = String::new();

    writeln!(md, "# {}\n", snapshot.label).unwrap();
    match backdrop(&snapshot.source, &snapshot.articles) {
        Backdrop::Image(url) => writeln!(md, "![{}]({})\n", snapshot.label, url).unwrap(),
        Backdrop::BrandLogo => writeln!(md, "*{}*\n", snapshot.label).unwrap(),
        Backdrop::None => {}
    }

    if snapshot.articles.is_empty() {
        writeln!(md, "No results found.").unwrap();
        return md;
    }

    for (i, article) in snapshot.articles.iter().enumerate() {
        let title = ranked_title(i, article);
        match preview_url(article) {
            Some(url) => write!(md, "- [{title}]({url})").unwrap(),
            None => write!(md, "- {title}").unwrap(),
        }
        if let Some(when) = relative_time(&article.published_at, now) {
            write!(md, " <small>{when}</small>").unwrap();
        }
        md.push('\n');
    }

    writeln!(md, "\n<small>Fetched {}. Powered by News API.</small>", snapshot.fetched_at).unwrap();
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;
    use chrono::TimeZone;

    fn snapshot(source: &str, articles: Vec<Article>) -> HeadlinesSnapshot {
        HeadlinesSnapshot {
            source: source.to_string(),
            label: "BBC News".to_string(),
            local_date: "2021-01-01".to_string(),
            fetched_at: "2021-01-01T12:00:00+00:00".to_string(),
            articles,
        }
    }

    #[test]
    fn test_markdown_lists_ranked_articles() {
        let now = Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap();
        let snap = snapshot(
            "bbc-news",
            vec![
                Article::new("A", "http://x", "http://y", "2021-01-01T11:55:00Z"),
                Article::new("null", "null", "null", "null"),
            ],
        );

        let md = headlines_to_markdown(&snap, now);
        assert!(md.starts_with("# BBC News\n"));
        assert!(md.contains("![BBC News](http://y)"));
        assert!(md.contains("- [1. A](http://x) <small>5 minutes ago</small>\n"));
        assert!(md.contains("- 2. <VOID>\n"));
    }

    #[test]
    fn test_markdown_empty_snapshot() {
        let now = Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap();
        let md = headlines_to_markdown(&snapshot("bbc-news", vec![]), now);
        assert!(md.contains("No results found."));
    }

    #[test]
    fn test_markdown_filename() {
        let snap = snapshot("reuters", vec![]);
        assert_eq!(markdown_filename(&snap), "2021-01-01_reuters.md");
        assert_eq!(
            markdown_path(&snap, "/tmp/md"),
            PathBuf::from("/tmp/md/2021-01-01_reuters.md")
        );
    }
}
