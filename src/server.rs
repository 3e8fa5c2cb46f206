// src/server.rs
//
// HTTP entry point: the same pipeline as the CLI, dry-run always off,
// reported as JSON. GET only; success and failure are distinguished by
// status code, but a swallowed send failure still reports 200.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::matcher::EventRow;
use crate::notify::NotifyOutcome;
use crate::runner;

#[derive(Serialize)]
struct WatchResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_result: Option<Value>,
    events: Vec<EventRow>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

pub fn router(config: Config) -> Router {
    Router::new()
        .route("/", get(watch_handler))
        .route("/api/watch", get(watch_handler))
        .with_state(Arc::new(config))
}

async fn watch_handler(State(config): State<Arc<Config>>) -> Response {
    let cfg = (*config).clone();
    let result = tokio::task::spawn_blocking(move || runner::run(&cfg, false)).await;

    let report = match result {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => return internal_error(e.to_string()),
        Err(join_err) => return internal_error(join_err.to_string()),
    };

    if report.matches.is_empty() {
        return Json(WatchResponse {
            message: "No matching events found".to_string(),
            email_result: None,
            events: Vec::new(),
        })
        .into_response();
    }

    // Forward the provider response verbatim when the send went through;
    // a swallowed send failure just leaves email_result out.
    let email_result = match report.outcome {
        Some(NotifyOutcome::Sent(body)) => Some(body),
        _ => None,
    };

    Json(WatchResponse {
        message: format!("Found {} matching events", report.matches.len()),
        email_result,
        events: report.matches.rows,
    })
    .into_response()
}

fn internal_error(error: String) -> Response {
    tracing::error!("watch run failed: {error}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error,
            message: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
