//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Language model completions for the persona
//! - `AnalysisSummarizer` - Checkpoint analysis over a conversation log

mod ai_provider;
mod analysis_summarizer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use analysis_summarizer::{AnalysisSummarizer, SummarizerError};
