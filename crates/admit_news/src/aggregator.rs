use std::sync::Arc;

use admit_core::{Article, Error, FeedFetcher, Result};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, info};
use url::Url;

use crate::feeds::{parse_feed_url, source_name, DEFAULT_FEEDS};
use crate::logging::Logger;
use crate::normalize::normalize_item;
use crate::parser::{parse_items, RawItem};
use crate::relevance::is_relevant_article;

/// Most articles returned by one aggregation.
pub const MAX_ARTICLES: usize = 12;

#[derive(Clone)]
pub struct NewsAggregator {
    fetcher: Arc<dyn FeedFetcher>,
    feeds: Vec<Url>,
}

impl NewsAggregator {
    pub fn new<I, S>(fetcher: Arc<dyn FeedFetcher>, feeds: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let feeds = feeds
            .into_iter()
            .map(|feed| parse_feed_url(feed.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fetcher, feeds })
    }

    pub fn with_default_feeds(fetcher: Arc<dyn FeedFetcher>) -> Result<Self> {
        Self::new(fetcher, DEFAULT_FEEDS)
    }

    pub fn feeds(&self) -> &[Url] {
        &self.feeds
    }

    pub fn feed_count(&self) -> usize {
        self.feeds.len()
    }

    /// Fetches every feed concurrently and returns the newest relevant
    /// articles. A feed that fails to load contributes nothing; only a feed
    /// task that dies outright fails the whole call.
    pub async fn aggregate(&self) -> Result<Vec<Article>> {
        let tasks: Vec<_> = self
            .feeds
            .iter()
            .cloned()
            .map(|feed| {
                let fetcher = self.fetcher.clone();
                tokio::spawn(async move { feed_articles(fetcher.as_ref(), &feed).await })
            })
            .collect();

        let mut articles = Vec::new();
        for result in join_all(tasks).await {
            let mut batch =
                result.map_err(|e| Error::Aggregation(format!("Feed task failed: {}", e)))?;
            articles.append(&mut batch);
        }

        let total = articles.len();
        newest_first(&mut articles);
        info!(
            "📰 Aggregated {} relevant articles from {} feeds, returning {}",
            total,
            self.feed_count(),
            articles.len()
        );
        Ok(articles)
    }
}

/// Loads one feed. Any fetch or parse error is logged and yields no articles.
pub async fn feed_articles(fetcher: &dyn FeedFetcher, feed: &Url) -> Vec<Article> {
    let source = source_name(feed);
    let logger = Logger::new().with_prefix(format!("[{}]", source));

    let items = match fetcher.fetch(feed.as_str()).await.and_then(|body| parse_items(&body)) {
        Ok(items) => items,
        Err(e) => {
            logger.warn(&format!("Skipping feed {}: {}", feed, e));
            return Vec::new();
        }
    };

    let scanned = items.len();
    let articles = relevant_articles(&items, feed, &source, Utc::now());
    logger.debug(&format!("{} of {} items kept", articles.len(), scanned));
    articles
}

pub fn relevant_articles(
    items: &[RawItem],
    feed: &Url,
    source: &str,
    fetched_at: DateTime<Utc>,
) -> Vec<Article> {
    items
        .iter()
        .filter_map(|item| normalize_item(item, feed, source, fetched_at))
        .filter(|article| {
            let keep = is_relevant_article(&article.title, &article.description);
            if !keep {
                debug!("Dropping off-topic item: {}", article.title);
            }
            keep
        })
        .collect()
}

/// Stable sort, newest first, then cap at `MAX_ARTICLES`.
pub fn newest_first(articles: &mut Vec<Article>) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    articles.truncate(MAX_ARTICLES);
}
