pub mod aggregator;
pub mod feeds;
pub mod fetcher;
pub mod logging;
pub mod normalize;
pub mod parser;
pub mod relevance;

#[cfg(test)]
pub(crate) mod test_utils;

pub use aggregator::{NewsAggregator, MAX_ARTICLES};
pub use feeds::DEFAULT_FEEDS;
pub use fetcher::HttpFetcher;

pub mod prelude {
    pub use super::aggregator::NewsAggregator;
    pub use super::fetcher::HttpFetcher;
    pub use admit_core::{Article, Error, FeedFetcher, Result};
}
