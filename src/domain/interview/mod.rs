//! Future-self interview domain.
//!
//! Pure building blocks of a conversation turn: the question script, the
//! stage machine, prompt construction, output post-processing and the
//! checkpoint policy. Nothing here performs I/O.

mod checkpoint;
mod chunker;
mod message;
mod profile;
mod prompt;
mod questions;
mod sanitizer;
mod state;

pub use checkpoint::{
    CheckpointPolicy, CheckpointSignal, CheckpointTrigger, ConversationLog,
    DEFAULT_CHECKPOINT_THRESHOLD,
};
pub use chunker::{ResponseChunker, DEFAULT_MAX_CHUNK_LEN};
pub use message::{Message, Role};
pub use profile::{UserProfile, MAX_INTERESTS};
pub use prompt::{PersonaTone, PromptBuilder, DEFAULT_TARGET_AGE};
pub use questions::PredefinedQuestions;
pub use sanitizer::{sanitize, FORMATTING_MARKERS};
pub use state::{ConversationState, Stage, StageKind};

#[cfg(test)]
pub(crate) use profile::fixtures;
