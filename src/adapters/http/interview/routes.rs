//! Route configuration for interview endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{chat, chat_stream, health, questions, InterviewAppState};

/// Creates the interview router with all endpoints.
///
/// Routes:
/// - `POST /api/chat` - Run one interview turn
/// - `POST /api/chat/stream` - Run one turn, delivered as Server-Sent Events
/// - `GET /api/questions` - The predefined question list
/// - `GET /health` - Liveness probe
pub fn interview_router() -> Router<InterviewAppState> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/chat/stream", post(chat_stream))
        .route("/api/questions", get(questions))
        .route("/health", get(health))
}
