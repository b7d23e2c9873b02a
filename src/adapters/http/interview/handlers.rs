//! HTTP handlers for interview endpoints.
//!
//! These handlers connect Axum routes to the turn handler in the application layer.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;

use crate::application::handlers::interview::{HandleTurnHandler, TurnError, TurnErrorKind};
use crate::domain::foundation::ValidationError;
use crate::domain::interview::PredefinedQuestions;
use crate::ports::AIProvider;

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, QuestionsResponse, TypingEvent,
};
use super::typing::{TypingReveal, DEFAULT_TYPING_INTERVAL};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for interview endpoints.
#[derive(Clone)]
pub struct InterviewAppState {
    pub turn_handler: Arc<HandleTurnHandler<dyn AIProvider>>,
    /// Delay between characters on the streaming endpoint.
    pub typing_interval: Duration,
}

impl InterviewAppState {
    pub fn new(turn_handler: Arc<HandleTurnHandler<dyn AIProvider>>) -> Self {
        Self {
            turn_handler,
            typing_interval: DEFAULT_TYPING_INTERVAL,
        }
    }

    pub fn with_typing_interval(mut self, interval: Duration) -> Self {
        self.typing_interval = interval;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Run one interview turn
pub async fn chat(
    State(state): State<InterviewAppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, InterviewApiError> {
    let Json(request) = payload?;
    let cmd = request.into_command()?;

    let result = state.turn_handler.handle(cmd).await?;

    Ok(Json(ChatResponse::from(result)))
}

/// POST /api/chat/stream - Run one turn and reveal it as Server-Sent Events
///
/// Emits `typing` events with growing prefixes of each chunk, then one
/// `done` event carrying the full turn response. Errors are reported as a
/// plain JSON error before any event is sent.
pub async fn chat_stream(
    State(state): State<InterviewAppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static>, InterviewApiError>
{
    let Json(request) = payload?;
    let cmd = request.into_command()?;

    let response = ChatResponse::from(state.turn_handler.handle(cmd).await?);
    let interval = state.typing_interval;

    let typing = stream::iter(response.chunks.clone().into_iter().enumerate()).flat_map(
        move |(index, chunk)| {
            TypingReveal::new(chunk, interval).map(move |text| {
                Ok::<_, Infallible>(json_event("typing", &TypingEvent { index, text }))
            })
        },
    );
    let done = stream::once(async move { Ok::<_, Infallible>(json_event("done", &response)) });

    Ok(Sse::new(typing.chain(done)).keep_alive(KeepAlive::default()))
}

/// GET /api/questions - The predefined interview questions
pub async fn questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: PredefinedQuestions::all()
            .iter()
            .map(|q| q.to_string())
            .collect(),
    })
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn json_event<T: Serialize>(name: &'static str, payload: &T) -> Event {
    Event::default()
        .event(name)
        .json_data(payload)
        .unwrap_or_else(|_| Event::default().event(name).data("{}"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

const UPSTREAM_MESSAGE: &str =
    "Your future self could not answer right now. Please try again.";

/// API error wrapper for turn failures.
#[derive(Debug)]
pub struct InterviewApiError(TurnError);

impl InterviewApiError {
    pub fn kind(&self) -> TurnErrorKind {
        self.0.kind()
    }
}

impl From<TurnError> for InterviewApiError {
    fn from(err: TurnError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for InterviewApiError {
    fn from(err: ValidationError) -> Self {
        Self(TurnError::Validation(err))
    }
}

impl From<JsonRejection> for InterviewApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TurnError::Validation(ValidationError::invalid_format(
            "body",
            rejection.body_text(),
        )))
    }
}

impl IntoResponse for InterviewApiError {
    fn into_response(self) -> axum::response::Response {
        let kind = self.0.kind();
        let code = self.0.code();

        let (status, message) = match &self.0 {
            TurnError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            // Detail was logged with the trace id where the turn failed
            TurnError::Upstream(_) => (StatusCode::BAD_GATEWAY, UPSTREAM_MESSAGE.to_string()),
        };

        let body = ErrorResponse::new(code.to_string(), kind.as_str(), message);
        (status, Json(body)).into_response()
    }
}
