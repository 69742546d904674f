use admit_core::{Error, Result};
use url::Url;

/// Education sections of Indian news outlets polled by the dashboard.
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://timesofindia.indiatimes.com/rssfeeds/913168846.cms",
    "https://www.thehindu.com/education/feeder/default.rss",
    "https://indianexpress.com/section/education/feed/",
    "https://www.hindustantimes.com/feeds/rss/education/rssfeed.xml",
    "https://www.indiatoday.in/rss/1206550",
];

pub fn parse_feed_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::InvalidUrl(format!("{}: unsupported scheme {}", url, scheme))),
    }
}

/// Display name for a feed, taken from its hostname.
pub fn source_name(feed: &Url) -> String {
    match feed.host_str() {
        Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
        None => feed.to_string(),
    }
}
