//! Future Self - Guided interviews with an AI-generated future self
//!
//! Each turn takes the transcript, the user's profile and the conversation
//! state from the client, asks a language model to answer as the user's
//! older self, and returns the reply as sanitized, bounded segments together
//! with the advanced state. The server keeps nothing between turns.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
