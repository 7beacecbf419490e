//! Decoding of search responses into [`NewsItem`] records.
//!
//! Only a small slice of the API's schema is consumed:
//!
//! ```text
//! response.results[].{webTitle, sectionName, webPublicationDate, webUrl,
//!                     tags[].{type, webTitle}}
//! ```
//!
//! Parsing is all-or-nothing: one malformed result fails the whole payload
//! and no partial list is returned.

use crate::models::NewsItem;
use itertools::Itertools;
use serde::Deserialize;
use thiserror::Error;

/// Why a payload produced no headlines.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("response body is empty")]
    Empty,

    #[error("malformed response JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("result {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

#[derive(Debug, Deserialize)]
struct Envelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    web_title: String,
    section_name: String,
    web_publication_date: String,
    web_url: String,
    tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
#[serde(try_from = "RawTag")]
struct Tag {
    kind: String,
    web_title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTag {
    #[serde(rename = "type")]
    kind: String,
    web_title: Option<String>,
}

impl TryFrom<RawTag> for Tag {
    type Error = String;

    fn try_from(raw: RawTag) -> Result<Self, Self::Error> {
        if raw.kind.eq_ignore_ascii_case("contributor") && raw.web_title.is_none() {
            return Err("contributor tag without webTitle".to_string());
        }
        Ok(Tag {
            kind: raw.kind,
            web_title: raw.web_title,
        })
    }
}

impl Tag {
    fn contributor_name(&self) -> Option<&str> {
        if self.kind.eq_ignore_ascii_case("contributor") {
            self.web_title.as_deref()
        } else {
            None
        }
    }
}

impl SearchResult {
    fn into_news_item(self, index: usize) -> Result<NewsItem, ParseError> {
        for (field, value) in [
            ("webTitle", &self.web_title),
            ("sectionName", &self.section_name),
            ("webPublicationDate", &self.web_publication_date),
            ("webUrl", &self.web_url),
        ] {
            if value.is_empty() {
                return Err(ParseError::EmptyField { index, field });
            }
        }

        let author = self.tags.iter().filter_map(Tag::contributor_name).join(", ");
        let author = (!author.is_empty()).then_some(author);

        Ok(NewsItem::new(
            self.web_title,
            self.section_name,
            self.web_publication_date,
            self.web_url,
            author,
        ))
    }
}

/// Parse a search response body into headlines, in source order.
///
/// A response without `results` yields an empty list.
///
/// # Errors
///
/// Returns [`ParseError`] if the body is blank, is not valid JSON, lacks the
/// `response` object, or any result misses a required field.
pub fn parse_headlines(body: &str) -> Result<Vec<NewsItem>, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let envelope: Envelope = serde_json::from_str(body)?;
    envelope
        .response
        .results
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, result)| result.into_news_item(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_json(title: &str, tags: &str) -> String {
        format!(
            r#"{{"webTitle":"{title}","sectionName":"Science","webPublicationDate":"2020-01-01T00:00:00Z","webUrl":"example.com/{title}","tags":{tags}}}"#
        )
    }

    fn payload(results: &[String]) -> String {
        format!(r#"{{"response":{{"status":"ok","results":[{}]}}}}"#, results.join(","))
    }

    #[test]
    fn test_parse_single_item() {
        let body = r#"{"response":{"results":[{"webTitle":"T","sectionName":"Science","webPublicationDate":"2020-01-01T00:00:00Z","webUrl":"example.com/a","tags":[{"type":"contributor","webTitle":"X"}]}]}}"#;
        let items = parse_headlines(body).unwrap();
        assert_eq!(
            items,
            vec![NewsItem::new(
                "T".to_string(),
                "Science".to_string(),
                "2020-01-01T00:00:00Z".to_string(),
                "example.com/a".to_string(),
                Some("X".to_string()),
            )]
        );
    }

    #[test]
    fn test_preserves_length_and_order() {
        let results: Vec<String> = ["a", "b", "c", "d"].iter().map(|t| result_json(t, "[]")).collect();
        let items = parse_headlines(&payload(&results)).unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_contributors_means_no_author() {
        let tags = r#"[{"type":"keyword","webTitle":"Physics"}]"#;
        let items = parse_headlines(&payload(&[result_json("a", tags)])).unwrap();
        assert_eq!(items[0].author(), None);
    }

    #[test]
    fn test_contributors_joined_in_order() {
        let tags = r#"[
            {"type":"contributor","webTitle":"Alice"},
            {"type":"keyword","webTitle":"Space"},
            {"type":"Contributor","webTitle":"Bob"}
        ]"#;
        let items = parse_headlines(&payload(&[result_json("a", tags)])).unwrap();
        assert_eq!(items[0].author(), Some("Alice, Bob"));
    }

    #[test]
    fn test_missing_results_is_empty() {
        assert!(parse_headlines(r#"{"response":{"status":"ok"}}"#).unwrap().is_empty());
        assert!(parse_headlines(r#"{"response":{"results":null}}"#).unwrap().is_empty());
        assert!(parse_headlines(r#"{"response":{"results":[]}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_empty_body_fails() {
        assert!(matches!(parse_headlines(""), Err(ParseError::Empty)));
        assert!(matches!(parse_headlines("  \n"), Err(ParseError::Empty)));
    }

    #[test]
    fn test_unparsable_json_fails() {
        assert!(matches!(parse_headlines("not json"), Err(ParseError::Malformed(_))));
        assert!(matches!(
            parse_headlines(r#"{"response":{"results":[{"webTitle":"#),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_missing_response_object_fails() {
        assert!(matches!(parse_headlines(r#"{"results":[]}"#), Err(ParseError::Malformed(_))));
        assert!(matches!(parse_headlines("[]"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_missing_required_field_fails_whole_batch() {
        let broken = r#"{"webTitle":"b","sectionName":"Science","webUrl":"example.com/b","tags":[]}"#;
        let body = payload(&[result_json("a", "[]"), broken.to_string(), result_json("c", "[]")]);
        assert!(matches!(parse_headlines(&body), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_empty_required_field_fails_whole_batch() {
        let broken = r#"{"webTitle":"","sectionName":"Science","webPublicationDate":"2020-01-01T00:00:00Z","webUrl":"example.com/b","tags":[]}"#;
        let body = payload(&[result_json("a", "[]"), broken.to_string()]);
        assert!(matches!(
            parse_headlines(&body),
            Err(ParseError::EmptyField { index: 1, field: "webTitle" })
        ));
    }

    #[test]
    fn test_missing_tags_fails() {
        let broken = r#"{"webTitle":"a","sectionName":"Science","webPublicationDate":"2020-01-01T00:00:00Z","webUrl":"example.com/a"}"#;
        assert!(matches!(
            parse_headlines(&payload(&[broken.to_string()])),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_contributor_without_name_fails() {
        let tags = r#"[{"type":"contributor"}]"#;
        assert!(matches!(
            parse_headlines(&payload(&[result_json("a", tags)])),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_contributor_without_name_is_ignored() {
        let tags = r#"[{"type":"series"},{"type":"contributor","webTitle":"Ann"}]"#;
        let items = parse_headlines(&payload(&[result_json("a", tags)])).unwrap();
        assert_eq!(items[0].author(), Some("Ann"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{"response":{"total":1,"results":[{"id":"x","webTitle":"T","sectionName":"World","webPublicationDate":"2021-05-06T07:08:09Z","webUrl":"https://www.theguardian.com/x","apiUrl":"https://content.guardianapis.com/x","tags":[]}]}}"#;
        let items = parse_headlines(body).unwrap();
        assert_eq!(items[0].category(), "World");
        assert_eq!(items[0].published_date(), "2021-05-06T07:08:09Z");
    }
}
