//! Mapping of a News API response body into [`Article`] records.
//!
//! The body must be a JSON object with an `articles` array of objects. Each
//! object yields exactly one [`Article`], in array order, with any missing
//! field replaced by [`NULL_SENTINEL`].

use crate::error::FetchError;
use crate::models::{Article, NULL_SENTINEL};
use serde_json::{Map, Value};

/// Extract the ordered article list from a response body.
///
/// # Errors
///
/// - [`FetchError::EmptyBody`] when the body is empty or whitespace
/// - [`FetchError::Json`] when the body is not JSON
/// - [`FetchError::MissingArticles`] when there is no top-level `articles` array
/// - [`FetchError::NotAnObject`] when an array element is not an object
///
/// An empty `articles` array is not an error.
pub fn extract_articles(body: &str) -> Result<Vec<Article>, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let document: Value = serde_json::from_str(body)?;
    let items = document
        .get("articles")
        .and_then(Value::as_array)
        .ok_or(FetchError::MissingArticles)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object()
                .map(article_from_object)
                .ok_or(FetchError::NotAnObject { index })
        })
        .collect()
}

fn article_from_object(object: &Map<String, Value>) -> Article {
    Article::new(
        field(object, "title"),
        field(object, "url"),
        field(object, "urlToImage"),
        field(object, "publishedAt"),
    )
}

/// Read `key` as a string. Absent and JSON null become the sentinel; other
/// non-string values are kept as their JSON text.
fn field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => NULL_SENTINEL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;

    #[test]
    fn test_extracts_articles_in_order() {
        let body = r#"{"articles":[
            {"title":"A","url":"http://x","urlToImage":"http://y","publishedAt":"2021-01-01T00:00:00Z"},
            {"title":null,"url":"http://z"}
        ]}"#;

        let articles = extract_articles(body).unwrap();
        assert_eq!(
            articles,
            vec![
                Article::new("A", "http://x", "http://y", "2021-01-01T00:00:00Z"),
                Article::new("null", "http://z", "null", "null"),
            ]
        );
    }

    #[test]
    fn test_null_string_null_and_absent_all_normalize() {
        let body = r#"{"articles":[
            {"title":null},
            {"title":"null"},
            {}
        ]}"#;

        let articles = extract_articles(body).unwrap();
        assert_eq!(articles.len(), 3);
        for article in &articles {
            assert_eq!(article.title, NULL_SENTINEL);
            assert_eq!(article.published_at, NULL_SENTINEL);
        }
    }

    #[test]
    fn test_preserves_duplicates_and_order() {
        let body = r#"{"articles":[{"title":"B"},{"title":"A"},{"title":"B"}]}"#;
        let titles: Vec<String> = extract_articles(body)
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_ignores_extra_fields() {
        let body = r#"{"status":"ok","source":"bbc-news","articles":[
            {"author":"X","description":"Y","title":"T","url":"u","urlToImage":"i","publishedAt":"p"}
        ]}"#;
        let articles = extract_articles(body).unwrap();
        assert_eq!(articles, vec![Article::new("T", "u", "i", "p")]);
    }

    #[test]
    fn test_non_string_scalars_are_stringified() {
        let body = r#"{"articles":[{"title":42,"url":true}]}"#;
        let articles = extract_articles(body).unwrap();
        assert_eq!(articles[0].title, "42");
        assert_eq!(articles[0].url, "true");
    }

    #[test]
    fn test_empty_array_is_success() {
        let articles = extract_articles(r#"{"articles":[]}"#).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_missing_articles_key_is_parse_error() {
        let err = extract_articles("{}").unwrap_err();
        assert!(matches!(err, FetchError::MissingArticles));
        assert_eq!(err.kind(), FetchErrorKind::Parse);
    }

    #[test]
    fn test_articles_not_an_array_is_parse_error() {
        let err = extract_articles(r#"{"articles":"none"}"#).unwrap_err();
        assert!(matches!(err, FetchError::MissingArticles));
    }

    #[test]
    fn test_top_level_array_is_parse_error() {
        let err = extract_articles("[]").unwrap_err();
        assert!(matches!(err, FetchError::MissingArticles));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = extract_articles("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Json(_)));
        assert_eq!(err.kind(), FetchErrorKind::Parse);
    }

    #[test]
    fn test_empty_body_is_parse_error() {
        assert!(matches!(extract_articles(""), Err(FetchError::EmptyBody)));
        assert!(matches!(extract_articles("  \n"), Err(FetchError::EmptyBody)));
    }

    #[test]
    fn test_non_object_element_is_parse_error() {
        let err = extract_articles(r#"{"articles":[{"title":"A"},7]}"#).unwrap_err();
        assert!(matches!(err, FetchError::NotAnObject { index: 1 }));
    }
}
