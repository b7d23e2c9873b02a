//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Model providers (OpenAI, mock)
//! - `analysis` - Checkpoint summarizers
//! - `http` - REST and SSE endpoints

pub mod ai;
pub mod analysis;
pub mod http;
