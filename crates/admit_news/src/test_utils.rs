use std::collections::HashMap;

use admit_core::{Error, FeedFetcher, Result};
use async_trait::async_trait;
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;

pub(crate) enum StubResponse {
    Body(String),
    Status(u16),
}

/// In-memory fetcher keyed by feed URL. Unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct StubFetcher {
    responses: HashMap<String, StubResponse>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_body(mut self, url: &str, body: String) -> Self {
        self.responses.insert(url.to_string(), StubResponse::Body(body));
        self
    }

    pub(crate) fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), StubResponse::Status(status));
        self
    }
}

#[async_trait]
impl FeedFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        match self.responses.get(url) {
            Some(StubResponse::Body(body)) => Ok(body.clone()),
            Some(StubResponse::Status(status)) => Err(Error::HttpStatus(*status)),
            None => Err(Error::HttpStatus(404)),
        }
    }
}

pub(crate) fn item(title: &str, description: &str, link: &str, pub_date: Option<&str>) -> String {
    let pub_date = pub_date
        .map(|d| format!("<pubDate>{}</pubDate>", d))
        .unwrap_or_default();
    format!(
        "<item><title>{}</title><description><![CDATA[{}]]></description><link>{}</link>{}</item>",
        title, description, link, pub_date
    )
}

pub(crate) fn channel(items: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel>
<title>Education</title>
<link>https://example.com/education</link>
<description>Education news</description>
{}
</channel>
</rss>"#,
        items.concat()
    )
}

pub(crate) struct FeedServer {
    base: String,
    task: tokio::task::JoinHandle<()>,
}

impl FeedServer {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Drop for FeedServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Serves fixed `(path, status, body)` routes on an ephemeral local port.
pub(crate) async fn spawn_feed_server(routes: Vec<(&'static str, u16, String)>) -> FeedServer {
    let mut app = Router::new();
    for (path, status, body) in routes {
        let status = StatusCode::from_u16(status).expect("status must be valid");
        app = app.route(
            path,
            get(move || {
                let body = body.clone();
                async move { (status, [(header::CONTENT_TYPE, "application/rss+xml")], body) }
            }),
        );
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let address = listener.local_addr().expect("local addr should exist");
    let task = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    FeedServer {
        base: format!("http://{}", address),
        task,
    }
}
