pub mod error;
pub mod fetch;
pub mod types;

pub use error::{Error, Result};
pub use fetch::FeedFetcher;
pub use types::{Article, ArticleSource};
