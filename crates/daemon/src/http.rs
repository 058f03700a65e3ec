// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP surface: the phone page and the JSON API.
//!
//! Every handler lazily starts the command worker before doing anything
//! else. Request bodies that are not a JSON object are treated as `{}`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use dr_adapters::ActionExecutor;
use dr_core::{Clock, CommandEvent, IdGen, RequestId};
use dr_engine::CommandService;
use serde::{Deserialize, Serialize};

use crate::auth::{TokenAuth, TOKEN_HEADER};

const INDEX_HTML: &str = include_str!("../static/index.html");

pub const UNAUTHORIZED: &str = "Unauthorized request.";
pub const QUEUED_MESSAGE: &str = "Command queued.";

/// Shared handler state
pub struct AppState<E, C, G> {
    pub service: CommandService<E, C, G>,
    pub auth: TokenAuth,
}

impl<E, C, G> AppState<E, C, G> {
    pub fn new(service: CommandService<E, C, G>, auth: TokenAuth) -> Self {
        Self { service, auth }
    }
}

/// Body of `POST /api/command`; also consulted for `token` on `GET /api/logs`.
#[derive(Debug, Default, Deserialize)]
struct CommandPayload {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    token: Option<String>,
}

impl CommandPayload {
    fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug, Serialize)]
struct CommandAccepted {
    ok: bool,
    message: &'static str,
    text: String,
    request_id: RequestId,
}

#[derive(Debug, Serialize)]
struct LogsBody {
    ok: bool,
    logs: Vec<CommandEvent>,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    ok: bool,
    queue_size: usize,
    worker_started: bool,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    let body = ErrorBody {
        ok: false,
        error: error.into(),
    };
    (status, Json(body)).into_response()
}

fn header_token(headers: &HeaderMap) -> Option<&str> {
    headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok())
}

/// Build the router over a shared service.
pub fn router<E, C, G>(state: Arc<AppState<E, C, G>>) -> Router
where
    E: ActionExecutor,
    C: Clock,
    G: IdGen,
{
    Router::new()
        .route("/", get(index::<E, C, G>))
        .route("/api/command", post(submit_command::<E, C, G>))
        .route("/api/logs", get(read_logs::<E, C, G>))
        .route("/api/health", get(health::<E, C, G>))
        .with_state(state)
}

async fn index<E, C, G>(State(state): State<Arc<AppState<E, C, G>>>) -> Html<&'static str>
where
    E: ActionExecutor,
    C: Clock,
    G: IdGen,
{
    state.service.ensure_worker_started();
    Html(INDEX_HTML)
}

async fn submit_command<E, C, G>(
    State(state): State<Arc<AppState<E, C, G>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    E: ActionExecutor,
    C: Clock,
    G: IdGen,
{
    state.service.ensure_worker_started();
    let payload = CommandPayload::parse(&body);
    if !state
        .auth
        .authorize(header_token(&headers), payload.token.as_deref())
    {
        tracing::warn!(route = "/api/command", "rejected unauthorized request");
        return error_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED);
    }

    let text = payload.text.as_deref().unwrap_or_default();
    let source = payload.source.as_deref().unwrap_or_default();
    match state.service.submit(text, source) {
        Ok(submitted) => Json(CommandAccepted {
            ok: true,
            message: QUEUED_MESSAGE,
            text: submitted.text,
            request_id: submitted.request_id,
        })
        .into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

async fn read_logs<E, C, G>(
    State(state): State<Arc<AppState<E, C, G>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    E: ActionExecutor,
    C: Clock,
    G: IdGen,
{
    state.service.ensure_worker_started();
    let payload = CommandPayload::parse(&body);
    if !state
        .auth
        .authorize(header_token(&headers), payload.token.as_deref())
    {
        tracing::warn!(route = "/api/logs", "rejected unauthorized request");
        return error_response(StatusCode::UNAUTHORIZED, UNAUTHORIZED);
    }

    Json(LogsBody {
        ok: true,
        logs: state.service.read_logs(),
    })
    .into_response()
}

async fn health<E, C, G>(State(state): State<Arc<AppState<E, C, G>>>) -> Response
where
    E: ActionExecutor,
    C: Clock,
    G: IdGen,
{
    let health = state.service.health();
    Json(HealthBody {
        ok: true,
        queue_size: health.queue_depth,
        worker_started: health.worker_started,
    })
    .into_response()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
