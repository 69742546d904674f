use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the raw body of a feed
    async fn fetch(&self, url: &str) -> Result<String>;
}
