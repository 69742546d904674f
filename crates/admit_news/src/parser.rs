use admit_core::{Error, Result};
use rss::{Channel, Item};
use scraper::{Html, Selector};

/// Items past this index in a channel are never looked at.
pub const MAX_ITEMS_PER_FEED: usize = 8;

/// Fields pulled out of one `<item>` before any cleaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub pub_date: Option<String>,
    pub image: Option<String>,
}

pub fn parse_items(body: &str) -> Result<Vec<RawItem>> {
    let channel = Channel::read_from(body.as_bytes())
        .map_err(|e| Error::Feed(format!("Failed to parse RSS: {}", e)))?;

    Ok(channel
        .items()
        .iter()
        .take(MAX_ITEMS_PER_FEED)
        .map(raw_item)
        .collect())
}

fn raw_item(item: &Item) -> RawItem {
    RawItem {
        title: item.title().unwrap_or_default().to_string(),
        description: item.description().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().trim().to_string(),
        pub_date: publish_date(item),
        image: image_candidate(item),
    }
}

fn publish_date(item: &Item) -> Option<String> {
    item.pub_date()
        .map(ToString::to_string)
        .or_else(|| {
            item.dublin_core_ext()
                .and_then(|dc| dc.dates().first().cloned())
        })
}

/// First usable image reference: an inline `<img>`, then media RSS, then an
/// image enclosure. May still be relative.
fn image_candidate(item: &Item) -> Option<String> {
    item.description()
        .and_then(first_img_src)
        .or_else(|| item.content().and_then(first_img_src))
        .or_else(|| media_url(item))
        .or_else(|| image_enclosure(item))
}

fn first_img_src(html: &str) -> Option<String> {
    let selector = Selector::parse("img[src]").ok()?;
    let fragment = Html::parse_fragment(html);
    let src = fragment
        .select(&selector)
        .filter_map(|el| el.value().attr("src"))
        .map(str::trim)
        .find(|src| !src.is_empty())
        .map(ToString::to_string);
    src
}

fn media_url(item: &Item) -> Option<String> {
    let media = item.extensions().get("media")?;
    ["content", "thumbnail"]
        .iter()
        .filter_map(|name| media.get(*name))
        .flatten()
        .filter_map(|ext| ext.attrs().get("url"))
        .map(|url| url.trim())
        .find(|url| !url.is_empty())
        .map(ToString::to_string)
}

fn image_enclosure(item: &Item) -> Option<String> {
    item.enclosure()
        .filter(|enclosure| enclosure.mime_type().starts_with("image/"))
        .map(|enclosure| enclosure.url().trim().to_string())
        .filter(|url| !url.is_empty())
}
