//! HTTP request handlers

use super::assets::{get_index_html, serve_static};
use super::types::{
    ChatRequest, ChatResponse, ErrorResponse, MessageView, PersonalityRequest, SessionResponse,
};
use super::AppState;
use crate::forwarder;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root serves the chat page
        .route("/", get(serve_page))
        // Static assets (embedded or filesystem fallback)
        .route("/assets/*path", get(serve_static))
        // Session state
        .route("/api/session", get(get_session))
        // User actions
        .route("/api/chat", post(send_chat))
        .route("/api/personality", post(select_personality))
        .route("/api/clear", post(clear_history))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Page
// ============================================================

async fn serve_page() -> impl IntoResponse {
    match get_index_html() {
        Some(content) => Html(content).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html("<h1>404 - UI not found</h1>".to_string()),
        )
            .into_response(),
    }
}

// ============================================================
// Session
// ============================================================

async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(SessionResponse::from(&*session))
}

async fn send_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = body?;
    let mut session = state.session.lock().await;

    let exchange = forwarder::submit_turn(&mut session, &req.text)
        .await
        .map_err(|e| {
            AppError::Upstream(format!(
                "An error occurred while getting the response: {e}"
            ))
        })?;

    Ok(Json(ChatResponse {
        user: MessageView::from(&exchange.user),
        reply: MessageView::from(&exchange.reply),
    }))
}

async fn select_personality(
    State(state): State<AppState>,
    body: Result<Json<PersonalityRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, AppError> {
    let Json(req) = body?;
    let mut session = state.session.lock().await;

    session
        .clear(req.personality)
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to initialize the chat model: {e}")))?;

    Ok(Json(SessionResponse::from(&*session)))
}

async fn clear_history(State(state): State<AppState>) -> Result<Json<SessionResponse>, AppError> {
    let mut session = state.session.lock().await;
    let personality = session.personality();

    session
        .clear(personality)
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to initialize the chat model: {e}")))?;

    Ok(Json(SessionResponse::from(&*session)))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("waterproof-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    /// The remote model call failed
    Upstream(String),
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status().is_server_error() {
            AppError::Internal(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
