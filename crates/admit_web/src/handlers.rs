use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use admit_core::{Article, Error};
use serde::Serialize;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub articles: Vec<Article>,
    pub status: &'static str,
}

impl NewsResponse {
    pub fn ok(articles: Vec<Article>) -> Self {
        Self { articles, status: "ok" }
    }
}

/// Error envelope. `articles` is always present so clients can render the
/// same shape either way.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub articles: Vec<Article>,
}

pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("❌ News aggregation failed: {}", self.0);
        let body = ErrorResponse {
            error: self.0.to_string(),
            articles: Vec::new(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NewsResponse>, ApiError> {
    let articles = state.aggregator.aggregate().await?;
    Ok(Json(NewsResponse::ok(articles)))
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
