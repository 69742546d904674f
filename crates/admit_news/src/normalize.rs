use admit_core::{Article, ArticleSource};
use chrono::{DateTime, Utc};
use scraper::Html;
use url::Url;

use crate::parser::RawItem;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 180;
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=800&auto=format&fit=crop";

/// Strips markup and entities, leaving single-spaced plain text.
pub fn clean_text(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].trim_end().to_string(),
        None => text.to_string(),
    }
}

/// Resolves `candidate` against the feed URL. Only http(s) results count.
pub fn resolve_url(base: &Url, candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }
    base.join(candidate)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(String::from)
}

pub fn parse_date(raw: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback;
    };
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|date| date.with_timezone(&Utc))
        .unwrap_or(fallback)
}

/// Turns a raw item into an article, or `None` when it has no title or link.
/// Relevance is not checked here.
pub fn normalize_item(
    item: &RawItem,
    feed: &Url,
    source: &str,
    fetched_at: DateTime<Utc>,
) -> Option<Article> {
    let title = truncate_chars(&clean_text(&item.title), MAX_TITLE_CHARS);
    if title.is_empty() {
        return None;
    }
    let url = resolve_url(feed, &item.link)?;
    let description = truncate_chars(&clean_text(&item.description), MAX_DESCRIPTION_CHARS);
    let url_to_image = item
        .image
        .as_deref()
        .and_then(|image| resolve_url(feed, image))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    Some(Article {
        title,
        description,
        url,
        url_to_image,
        published_at: parse_date(item.pub_date.as_deref(), fetched_at),
        source: ArticleSource::new(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn feed() -> Url {
        Url::parse("https://example.com/education/feed.xml").unwrap()
    }

    fn raw(title: &str, description: &str, link: &str) -> RawItem {
        RawItem {
            title: title.to_string(),
            description: description.to_string(),
            link: link.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_text_strips_tags_and_entities() {
        assert_eq!(
            clean_text("<p>JEE&nbsp;Main &amp; Advanced</p><br/> <b>dates</b>"),
            "JEE Main & Advanced dates"
        );
        assert_eq!(
            clean_text("&lt;CBSE&gt; &quot;board&quot; exam&#39;s   schedule"),
            "<CBSE> \"board\" exam's schedule"
        );
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("परीक्षा परिणाम", 4).chars().count(), 4);
        assert_eq!(truncate_chars("ab cd", 3), "ab");
    }

    #[test]
    fn test_resolve_url() {
        let feed = feed();
        assert_eq!(
            resolve_url(&feed, "/img/x.jpg").as_deref(),
            Some("https://example.com/img/x.jpg")
        );
        assert_eq!(
            resolve_url(&feed, "//cdn.example.org/x.jpg").as_deref(),
            Some("https://cdn.example.org/x.jpg")
        );
        assert_eq!(
            resolve_url(&feed, "https://other.org/a.png").as_deref(),
            Some("https://other.org/a.png")
        );
        assert_eq!(resolve_url(&feed, ""), None);
        assert_eq!(resolve_url(&feed, "data:image/png;base64,AAAA"), None);
    }

    #[test]
    fn test_parse_date() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            parse_date(Some("Tue, 04 Mar 2025 10:00:00 +0530"), now),
            Utc.with_ymd_and_hms(2025, 3, 4, 4, 30, 0).unwrap()
        );
        assert_eq!(
            parse_date(Some("2025-02-10T08:00:00Z"), now),
            Utc.with_ymd_and_hms(2025, 2, 10, 8, 0, 0).unwrap()
        );
        assert_eq!(parse_date(Some("sometime last week"), now), now);
        assert_eq!(parse_date(None, now), now);
    }

    #[test]
    fn test_normalize_item_truncates_and_falls_back() {
        let now = Utc::now();
        let long_title = "Exam ".repeat(40);
        let long_description = format!("<p>{}</p>", "admission ".repeat(40));
        let article = normalize_item(
            &raw(&long_title, &long_description, "/news/1"),
            &feed(),
            "example.com",
            now,
        )
        .unwrap();

        assert!(article.title.chars().count() <= MAX_TITLE_CHARS);
        assert!(article.description.chars().count() <= MAX_DESCRIPTION_CHARS);
        assert_eq!(article.url, "https://example.com/news/1");
        assert_eq!(article.url_to_image, PLACEHOLDER_IMAGE);
        assert_eq!(article.published_at, now);
        assert_eq!(article.source.name, "example.com");
    }

    #[test]
    fn test_normalize_item_requires_title_and_link() {
        let now = Utc::now();
        assert!(normalize_item(&raw("", "exam", "https://example.com/a"), &feed(), "x", now).is_none());
        assert!(normalize_item(&raw("<b> </b>", "exam", "https://example.com/a"), &feed(), "x", now).is_none());
        assert!(normalize_item(&raw("Exam", "exam", ""), &feed(), "x", now).is_none());
    }

    #[test]
    fn test_normalize_item_resolves_relative_image() {
        let item = RawItem {
            image: Some("/img/x.jpg".to_string()),
            ..raw("JEE Main exam results", "", "https://example.com/jee")
        };
        let article = normalize_item(&item, &feed(), "example.com", Utc::now()).unwrap();
        assert_eq!(article.url_to_image, "https://example.com/img/x.jpg");
    }
}
