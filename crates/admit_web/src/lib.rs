use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

pub fn create_app(state: AppState) -> Router {
    let news = get(handlers::get_news)
        .post(handlers::get_news)
        .options(handlers::preflight);

    Router::new()
        .route("/api/news", news.clone())
        .route("/news", news)
        .layer(cors_layer())
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use admit_core::{Article, Result, Error};
    pub use crate::AppState;
}
