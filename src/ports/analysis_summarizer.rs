//! AnalysisSummarizer port for checkpoint summaries

use async_trait::async_trait;

use crate::domain::interview::ConversationLog;

/// Produces the analysis text offered to the user at a checkpoint.
///
/// The orchestrator decides when a summary is needed and hands over the
/// full conversation log; implementations decide what to say about it.
#[async_trait]
pub trait AnalysisSummarizer: Send + Sync {
    async fn summarize(&self, log: &ConversationLog) -> Result<String, SummarizerError>;
}

/// Summary generation failures. Never fatal to a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummarizerError {
    #[error("summarizer unavailable: {0}")]
    Unavailable(String),

    #[error("summary generation failed: {0}")]
    Failed(String),
}
