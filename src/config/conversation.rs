//! Conversation engine configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::interview::{
    CheckpointPolicy, CheckpointTrigger, PersonaTone, PromptBuilder, ResponseChunker,
    DEFAULT_CHECKPOINT_THRESHOLD, DEFAULT_MAX_CHUNK_LEN, DEFAULT_TARGET_AGE,
};

/// Tunables for the interview itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationConfig {
    /// Longest delivered segment, in characters
    #[serde(default = "default_max_chunk_len")]
    pub max_chunk_len: usize,

    /// Exchange count at which the checkpoint fires
    #[serde(default = "default_checkpoint_threshold")]
    pub checkpoint_threshold: u32,

    #[serde(default)]
    pub checkpoint_policy: CheckpointPolicy,

    /// Age the persona speaks from
    #[serde(default = "default_target_age")]
    pub persona_target_age: u32,

    #[serde(default)]
    pub persona_tone: PersonaTone,

    /// Delay between revealed characters on the streaming endpoint
    #[serde(default = "default_typing_interval")]
    pub typing_interval_ms: u64,
}

impl ConversationConfig {
    pub fn prompt_builder(&self) -> PromptBuilder {
        PromptBuilder::new(self.persona_target_age, self.persona_tone)
    }

    pub fn chunker(&self) -> ResponseChunker {
        ResponseChunker::new(self.max_chunk_len)
    }

    pub fn checkpoint_trigger(&self) -> CheckpointTrigger {
        CheckpointTrigger::new(self.checkpoint_threshold, self.checkpoint_policy)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_chunk_len == 0 {
            return Err(ValidationError::InvalidChunkLength);
        }
        if self.checkpoint_threshold == 0 {
            return Err(ValidationError::InvalidCheckpointThreshold);
        }
        if self.persona_target_age == 0 {
            return Err(ValidationError::InvalidTargetAge);
        }
        Ok(())
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_chunk_len: default_max_chunk_len(),
            checkpoint_threshold: default_checkpoint_threshold(),
            checkpoint_policy: CheckpointPolicy::default(),
            persona_target_age: default_target_age(),
            persona_tone: PersonaTone::default(),
            typing_interval_ms: default_typing_interval(),
        }
    }
}

fn default_max_chunk_len() -> usize {
    DEFAULT_MAX_CHUNK_LEN
}

fn default_checkpoint_threshold() -> u32 {
    DEFAULT_CHECKPOINT_THRESHOLD
}

fn default_target_age() -> u32 {
    DEFAULT_TARGET_AGE
}

fn default_typing_interval() -> u64 {
    20
}
