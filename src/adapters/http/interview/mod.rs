//! HTTP adapter for the interview.
//!
//! - `POST /api/chat` - Run one turn
//! - `POST /api/chat/stream` - Run one turn, revealed over Server-Sent Events
//! - `GET /api/questions` - The predefined questions
//! - `GET /health` - Liveness

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod typing;

pub use dto::*;
pub use handlers::{InterviewApiError, InterviewAppState};
pub use routes::interview_router;
pub use typing::{TypingReveal, DEFAULT_TYPING_INTERVAL};
