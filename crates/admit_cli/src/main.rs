use clap::Parser;
use admit_core::Result;
use admit_news::feeds::source_name;
use admit_news::logging::init_logging;
use admit_news::{HttpFetcher, NewsAggregator};
use admit_web::handlers::NewsResponse;
use admit_web::{create_app, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Admissions news feed service", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,
    /// Feed URL to aggregate instead of the built-in list. Repeatable.
    #[arg(long = "feed", global = true)]
    feeds: Vec<String>,
    /// Per-request timeout for feed fetches, in seconds. Unset means no timeout.
    #[arg(long, global = true)]
    fetch_timeout: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the news endpoint over HTTP
    Serve {
        #[arg(long, env = "ADMIT_BIND", default_value = "0.0.0.0:8787")]
        bind: SocketAddr,
    },
    /// Aggregate once and print the response JSON
    News {
        #[arg(long)]
        pretty: bool,
    },
    /// List configured feeds
    Feeds,
}

impl Cli {
    fn aggregator(&self) -> Result<NewsAggregator> {
        let fetcher = HttpFetcher::with_timeout(self.fetch_timeout.map(Duration::from_secs))?;
        let fetcher = Arc::new(fetcher);
        if self.feeds.is_empty() {
            NewsAggregator::with_default_feeds(fetcher)
        } else {
            NewsAggregator::new(fetcher, &self.feeds)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("👋 Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_prefix("[admit]".to_string());

    let aggregator = cli.aggregator()?;

    match cli.command {
        Commands::Serve { bind } => {
            logger.info(&format!("📡 Aggregating {} feeds", aggregator.feed_count()));
            let app = create_app(AppState::new(aggregator));
            let listener = tokio::net::TcpListener::bind(bind).await?;
            logger.info(&format!("🚀 Listening on http://{}", listener.local_addr()?));
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Commands::News { pretty } => {
            let response = NewsResponse::ok(aggregator.aggregate().await?);
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", json);
        }
        Commands::Feeds => {
            let configured = if cli.feeds.is_empty() { "built-in" } else { "custom" };
            println!("{} feeds ({}):", aggregator.feed_count(), configured);
            for feed in aggregator.feeds() {
                println!("  - {} ({})", source_name(feed), feed);
            }
        }
    }

    Ok(())
}
