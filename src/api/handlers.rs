//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{debug, info};

use crate::{error::AppError, state::{AppState, TimerView}};
use super::responses::{ApiResponse, CodeRequest, HealthResponse, InputRequest, StatusResponse};

/// Handle GET /view - Current reactor projection
pub async fn view_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerView>, AppError> {
    Ok(Json(state.view()?))
}

/// Handle PUT /input - Replace the pending code entry
pub async fn input_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InputRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let view = state.set_input(&request.raw)?;
    debug!("Input endpoint called - pending input now '{}'", view.pending_input);
    Ok(Json(ApiResponse::input(view)))
}

/// Handle POST /submit - Evaluate the pending code entry
pub async fn submit_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, AppError> {
    let (outcome, view) = state.submit()?;
    info!("Submit endpoint called - {}", outcome.label());
    Ok(Json(ApiResponse::submitted(outcome, view)))
}

/// Handle POST /code - Enter and submit a code in one step
pub async fn code_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CodeRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let (outcome, view) = state.enter_code(&request.code)?;
    info!("Code endpoint called - {}", outcome.label());
    Ok(Json(ApiResponse::submitted(outcome, view)))
}

/// Handle GET /events - Stream every view change as a server-sent event
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Event stream client connected");
    let view_rx = state.subscribe();

    // The current view goes out first, then one event per change
    let events = stream::unfold((view_rx, true), |(mut view_rx, first)| async move {
        if !first && view_rx.changed().await.is_err() {
            return None;
        }
        let view = view_rx.borrow_and_update().clone();
        let event = Event::default()
            .event("view")
            .json_data(&view)
            .unwrap_or_else(|e| Event::default().event("error").data(e.to_string()));
        Some((Ok(event), (view_rx, false)))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /status - Reactor view plus server information
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, AppError> {
    let view = state.view()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        view,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
