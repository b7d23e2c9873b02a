//! HandleTurnHandler - Run one exchange of the future-self interview

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{ErrorCode, Timestamp, ValidationError};
use crate::domain::interview::{
    sanitize, CheckpointSignal, CheckpointTrigger, ConversationLog, ConversationState, Message,
    PromptBuilder, ResponseChunker, UserProfile,
};
use crate::ports::{
    AIError, AIProvider, AnalysisSummarizer, CompletionRequest, CompletionResponse, FinishReason,
    RequestMetadata,
};

/// Command carrying everything the caller holds between turns.
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    /// Transcript so far, oldest first.
    pub messages: Vec<Message>,
    pub profile: Option<UserProfile>,
    /// State before this turn.
    pub state: ConversationState,
}

/// Result of a successful turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleTurnResult {
    pub chunks: Vec<String>,
    /// State after this turn.
    pub state: ConversationState,
    /// Predefined question the next turn will ask, `None` once open.
    pub next_question: Option<&'static str>,
    pub checkpoint: CheckpointSignal,
    pub trace_id: String,
}

/// Broad class of a turn failure, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnErrorKind {
    Validation,
    Upstream,
}

impl TurnErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnErrorKind::Validation => "validation",
            TurnErrorKind::Upstream => "upstream",
        }
    }
}

/// Error type for a turn. The caller's state is never advanced on error.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    /// Request rejected before any model call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Model failed, timed out or produced nothing deliverable.
    #[error("model call failed: {0}")]
    Upstream(#[from] AIError),
}

impl TurnError {
    pub fn kind(&self) -> TurnErrorKind {
        match self {
            TurnError::Validation(_) => TurnErrorKind::Validation,
            TurnError::Upstream(_) => TurnErrorKind::Upstream,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TurnError::Validation(_) => ErrorCode::ValidationFailed,
            TurnError::Upstream(_) => ErrorCode::UpstreamFailed,
        }
    }
}

/// Tunables for a turn, built from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnSettings {
    pub prompt: PromptBuilder,
    pub chunker: ResponseChunker,
    pub checkpoint: CheckpointTrigger,
    /// Upper bound on one model call.
    pub model_timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for TurnSettings {
    fn default() -> Self {
        Self {
            prompt: PromptBuilder::default(),
            chunker: ResponseChunker::default(),
            checkpoint: CheckpointTrigger::default(),
            model_timeout: Duration::from_secs(30),
            temperature: 0.3,
            max_tokens: 500,
        }
    }
}

/// Handler for interview turns.
///
/// Stateless between calls: every input arrives in the command and every
/// output leaves in the result.
pub struct HandleTurnHandler<P: ?Sized + AIProvider> {
    ai_provider: Arc<P>,
    summarizer: Arc<dyn AnalysisSummarizer>,
    settings: TurnSettings,
}

impl<P: ?Sized + AIProvider> HandleTurnHandler<P> {
    pub fn new(
        ai_provider: Arc<P>,
        summarizer: Arc<dyn AnalysisSummarizer>,
        settings: TurnSettings,
    ) -> Self {
        Self {
            ai_provider,
            summarizer,
            settings,
        }
    }

    pub fn settings(&self) -> &TurnSettings {
        &self.settings
    }

    pub async fn handle(&self, cmd: HandleTurnCommand) -> Result<HandleTurnResult, TurnError> {
        // 1. A profile is required before anything reaches the model
        let profile = cmd
            .profile
            .ok_or_else(|| ValidationError::missing_field("userProfile"))?;
        profile.validate()?;

        // 2. Build the instruction for the current stage
        let instruction = self.settings.prompt.build(&profile, &cmd.state);
        let metadata = RequestMetadata::generate();
        let trace_id = metadata.trace_id.clone();

        // 3. One bounded model call
        let request = CompletionRequest::new(metadata)
            .with_system_prompt(instruction)
            .with_history(&cmd.messages)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);

        let response = match self.call_model(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(
                    trace_id = %trace_id,
                    stage = %cmd.state.stage().kind(),
                    exchange_count = cmd.state.exchange_count(),
                    error = %err,
                    "Model call failed; conversation state left unchanged"
                );
                return Err(err.into());
            }
        };

        // 4. Sanitize and chunk; nothing deliverable is an upstream failure
        let text = sanitize(&response.content);
        let chunks = self.settings.chunker.chunk(&text);
        if chunks.is_empty() {
            tracing::warn!(trace_id = %trace_id, "Model reply was blank after sanitizing");
            return Err(AIError::EmptyResponse.into());
        }

        // 5. Advance and evaluate the checkpoint
        let state = cmd.state.advance();
        let next_question = state.pending_question();

        let checkpoint = if self.settings.checkpoint.fires(&state) {
            let mut messages = cmd.messages;
            messages.push(Message::assistant(text));
            let log = ConversationLog {
                timestamp: Timestamp::now(),
                profile,
                state,
                messages,
                next_question,
            };
            let analysis = self.summarize(&log, &trace_id).await;
            tracing::info!(
                trace_id = %trace_id,
                exchange_count = state.exchange_count(),
                "Checkpoint reached"
            );
            CheckpointSignal::with_analysis(analysis)
        } else {
            CheckpointSignal::none()
        };

        tracing::info!(
            trace_id = %trace_id,
            stage = %state.stage().kind(),
            exchange_count = state.exchange_count(),
            chunks = chunks.len(),
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Turn completed"
        );

        Ok(HandleTurnResult {
            chunks,
            state,
            next_question,
            checkpoint,
            trace_id,
        })
    }

    /// Calls the model under the configured timeout.
    async fn call_model(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, AIError> {
        let trace_id = request.metadata.trace_id.clone();
        let timeout = self.settings.model_timeout;

        let response = tokio::time::timeout(timeout, self.ai_provider.complete(request))
            .await
            .map_err(|_| AIError::timeout(timeout))??;

        if response.finish_reason == FinishReason::Length {
            tracing::warn!(
                trace_id = %trace_id,
                max_tokens = self.settings.max_tokens,
                "Model reply truncated at token limit"
            );
        }

        tracing::debug!(trace_id = %trace_id, model = %response.model, "Model call succeeded");

        Ok(response)
    }

    /// Summary from the configured summarizer, or the template on failure.
    async fn summarize(&self, log: &ConversationLog, trace_id: &str) -> String {
        match self.summarizer.summarize(log).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(
                    trace_id = %trace_id,
                    error = %err,
                    "Summarizer failed, using template analysis"
                );
                log.template_summary()
            }
        }
    }
}
