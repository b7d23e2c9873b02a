//! Placeholder checkpoint analysis.

use async_trait::async_trait;

use crate::domain::interview::ConversationLog;
use crate::ports::{AnalysisSummarizer, SummarizerError};

/// Summarizer that fills the fixed analysis template.
///
/// Reports the message count and leaves concerns, goals and traits as
/// placeholders. It never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSummarizer;

impl TemplateSummarizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalysisSummarizer for TemplateSummarizer {
    async fn summarize(&self, log: &ConversationLog) -> Result<String, SummarizerError> {
        Ok(log.template_summary())
    }
}
